use fzolv_base::logging::{default_level, init_stdout_logger, StdoutLogger};
use log::{LevelFilter, Log};

fn metadata(level: log::Level) -> log::Metadata<'static> {
    log::MetadataBuilder::new().level(level).target("test").build()
}

#[test]
fn test_default_level_follows_build_mode() {
    if cfg!(debug_assertions) {
        assert_eq!(default_level(), LevelFilter::Debug);
    } else {
        assert_eq!(default_level(), LevelFilter::Info);
    }
}

// the only test in this binary that touches the global logger
#[test]
fn test_init_stdout_logger_sets_global_logger() {
    init_stdout_logger();
    // repeated installs are ignored
    init_stdout_logger();

    assert_eq!(log::max_level(), default_level());
    assert!(log::logger().enabled(&metadata(log::Level::Info)));
    assert!(!log::logger().enabled(&metadata(log::Level::Trace)));
    assert!(!StdoutLogger.enabled(&metadata(log::Level::Trace)));

    log::info!("message through the global logger");
    log::logger().flush();
}
