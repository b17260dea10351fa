use launch_guard as lg;
use lg::host::Environment;
use lg::SimWindow;
use proptest::prelude::*;

proptest! {
    // One close request per load when the opener signal is set, none ever
    // when it is not, no matter how many times the load event replays.
    #[test]
    fn close_requests_track_loads_exactly(opener: bool, loads in 0usize..32) {
        let mut env = Environment::windowed(SimWindow::new().with_opener(opener));
        prop_assert!(lg::install(&mut env));
        for _ in 0..loads {
            env.fire_load();
        }
        let expected = if opener { loads } else { 0 };
        prop_assert_eq!(env.window().unwrap().close_requests(), expected);
    }
}
