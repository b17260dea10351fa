use launch_guard as lg;
use lg::host::Environment;
use lg::SimWindow;

#[test]
fn test_opener_closes_on_load() {
    let mut env = Environment::windowed(SimWindow::new().with_opener(true));
    assert!(lg::install(&mut env));
    env.fire_load();
    assert_eq!(env.window().unwrap().close_requests(), 1);
}

#[test]
fn test_no_opener_continues() {
    let mut env = Environment::windowed(SimWindow::new());
    assert!(lg::install(&mut env));
    env.fire_load();
    assert_eq!(env.window().unwrap().close_requests(), 0);
}

// Host refusal of the close request is host-defined behavior: not surfaced,
// not retried. One request is still all the guard ever issues per load.
#[test]
fn test_refused_close_not_retried() {
    let mut env = Environment::windowed(SimWindow::new().with_opener(true).refusing_close());
    assert!(lg::install(&mut env));
    env.fire_load();
    assert_eq!(env.window().unwrap().close_requests(), 1);
}

#[test]
fn test_repeated_loads_without_opener_never_close() {
    let mut env = Environment::windowed(SimWindow::new());
    assert!(lg::install(&mut env));
    for _ in 0..5 {
        env.fire_load();
    }
    assert_eq!(env.window().unwrap().close_requests(), 0);
}
