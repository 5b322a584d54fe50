use recap::setup_logging;

#[test]
fn subscriber_installs_and_accepts_events() {
    // Installing the global subscriber and emitting through it must not
    // panic; output itself goes to stderr and is not captured here.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        tracing::info!("logging online");
    });

    assert!(result.is_ok());
}
