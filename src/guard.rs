use crate::host::WindowHost;
use serde::Serialize;
use tracing::{debug, trace};

/// What the guard decided for this context. Both variants are terminal from
/// the guard's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// No opener reference; the context continues loading normally.
    Continuing,
    /// An opener reference was present and a close was requested.
    Terminated,
}

/// Closes a duplicate context on load.
///
/// A context opened by another context (one that still holds an opener
/// reference to its creator) is a duplicate instance; the guard asks the host
/// to close it and does nothing else. Stateless, so replaying the load event
/// re-runs the same single-branch check.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchGuard;

impl LaunchGuard {
    pub fn new() -> Self {
        Self
    }

    /// The load handler: one check, at most one close request.
    ///
    /// A refused or unsupported close is host-defined behavior; it is logged
    /// and otherwise ignored, never retried.
    pub fn on_load<H: WindowHost>(&self, window: &mut H) -> Disposition {
        if window.has_opener() {
            debug!("opener reference present, requesting close");
            if let Err(err) = window.request_close() {
                debug!(error = %err, "host declined close request");
            }
            Disposition::Terminated
        } else {
            trace!("no opener reference, continuing");
            Disposition::Continuing
        }
    }
}
