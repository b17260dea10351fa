use crate::errors::Result;
use crate::events::LoadDispatcher;
use crate::guard::LaunchGuard;
use tracing::debug;

/// Capability surface a windowing host must expose to the guard.
pub trait WindowHost {
    /// True when this context holds a reference to the context that opened it.
    fn has_opener(&self) -> bool;

    /// Ask the host to close the current context. Whether the host honors
    /// the request is host-defined; callers must not assume the context is
    /// gone afterwards.
    fn request_close(&mut self) -> Result<()>;
}

/// The execution environment as the guard sees it: possibly a window, plus
/// the load event the host fires when content has finished loading.
///
/// A headless environment (`window` absent) models server-side execution;
/// everything registered against it is skipped, never errored.
pub struct Environment<H: WindowHost> {
    window: Option<H>,
    load: LoadDispatcher<H>,
}

impl<H: WindowHost> Environment<H> {
    pub fn windowed(window: H) -> Self {
        Self { window: Some(window), load: LoadDispatcher::new() }
    }

    pub fn headless() -> Self {
        Self { window: None, load: LoadDispatcher::new() }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Number of registered load handlers.
    pub fn load_handlers(&self) -> usize {
        self.load.len()
    }

    /// Attach the guard to the load event. Capability check first: with no
    /// window present nothing is registered and `false` is returned.
    pub fn install(&mut self, guard: LaunchGuard) -> bool {
        if self.window.is_none() {
            debug!("no windowing host, guard not installed");
            return false;
        }
        self.load.register(move |window: &mut H| {
            guard.on_load(window);
        });
        true
    }

    /// Host-side trigger: content finished loading. No-op when headless.
    pub fn fire_load(&mut self) {
        if let Some(window) = self.window.as_mut() {
            self.load.dispatch(window);
        }
    }

    pub fn window(&self) -> Option<&H> {
        self.window.as_ref()
    }
}

pub mod sim {
    use super::WindowHost;
    use crate::errors::{HostError, Result};

    /// Scriptable window used by the simulator binary and the tests.
    /// Counts close requests instead of actually terminating anything.
    #[derive(Debug, Default)]
    pub struct SimWindow {
        opener: bool,
        refuse_close: bool,
        close_requests: usize,
    }

    impl SimWindow {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_opener(mut self, opener: bool) -> Self {
            self.opener = opener;
            self
        }

        pub fn refusing_close(mut self) -> Self {
            self.refuse_close = true;
            self
        }

        pub fn close_requests(&self) -> usize {
            self.close_requests
        }
    }

    impl WindowHost for SimWindow {
        fn has_opener(&self) -> bool {
            self.opener
        }

        fn request_close(&mut self) -> Result<()> {
            self.close_requests += 1;
            if self.refuse_close {
                return Err(HostError::Refused("context not script-opened".into()));
            }
            Ok(())
        }
    }
}
