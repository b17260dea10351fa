pub mod errors;
pub mod events; // load lifecycle dispatch
pub mod guard;
pub mod host; // capability seam + simulated window

use guard::LaunchGuard;
use host::{Environment, WindowHost};

/// Convenience: attach a fresh guard to an environment's load event.
/// Returns whether the guard was actually registered; `false` means the
/// environment is headless and the whole check was skipped.
pub fn install<H: WindowHost>(env: &mut Environment<H>) -> bool {
    env.install(LaunchGuard::new())
}

/// Re-export the most-used types for users who wire the guard directly.
pub use guard::Disposition;
pub use host::sim::SimWindow;
