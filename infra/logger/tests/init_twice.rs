use lazy_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder()
        .name("lazy-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("lazy-init-twice-again")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "got: {err}");
}
