use clap::Parser;
use launch_guard::guard::{Disposition, LaunchGuard};
use launch_guard::host::sim::SimWindow;
use launch_guard::host::Environment;
use serde::Serialize;

/// Simple runner: simulate a context load and report what the guard did.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Pretend the context was opened by another context
    #[arg(long)]
    opener: bool,
    /// Run without a windowing host (guard must skip installation)
    #[arg(long)]
    headless: bool,
    /// Make the host refuse the close request
    #[arg(long)]
    refuse_close: bool,
    /// Number of load events to fire
    #[arg(long, default_value_t = 1)]
    loads: usize,
}

#[derive(Serialize)]
struct Report {
    installed: bool,
    loads_fired: usize,
    close_requests: usize,
    disposition: Option<Disposition>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Build the environment.
    let mut env = if args.headless {
        Environment::headless()
    } else {
        let mut window = SimWindow::new().with_opener(args.opener);
        if args.refuse_close {
            window = window.refusing_close();
        }
        Environment::windowed(window)
    };

    // Install the guard and fire the load event(s).
    let installed = env.install(LaunchGuard::new());
    for _ in 0..args.loads {
        env.fire_load();
    }

    // Report the observed outcome.
    let close_requests = env.window().map_or(0, |window| window.close_requests());
    let disposition = env.window().map(|_| {
        if close_requests > 0 {
            Disposition::Terminated
        } else {
            Disposition::Continuing
        }
    });
    let report = Report {
        installed,
        loads_fired: args.loads,
        close_requests,
        disposition,
    };
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
