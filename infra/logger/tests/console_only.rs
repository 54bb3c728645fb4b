use fprog_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("fprog-console-only")
        .console(true)
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("console logging goes to stderr");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
