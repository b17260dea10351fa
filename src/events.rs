use crate::host::WindowHost;

/// Handlers registered against the host's load lifecycle event.
///
/// Hosts fire load once per context lifetime; the dispatcher itself does not
/// enforce that, so tests can replay the event.
pub struct LoadDispatcher<H: WindowHost> {
    handlers: Vec<Box<dyn FnMut(&mut H)>>,
}

impl<H: WindowHost> Default for LoadDispatcher<H> {
    fn default() -> Self {
        Self { handlers: Vec::new() }
    }
}

impl<H: WindowHost> LoadDispatcher<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: impl FnMut(&mut H) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler against `window`, in registration order.
    pub fn dispatch(&mut self, window: &mut H) {
        for handler in &mut self.handlers {
            handler(window);
        }
    }
}
