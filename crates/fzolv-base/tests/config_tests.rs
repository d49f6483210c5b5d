use fzolv_base::{config::LOG_LEVEL_VAR, init_logger, LogConfig};
use log::LevelFilter;

#[test]
fn test_default_config() {
    let config = LogConfig::default();
    if cfg!(debug_assertions) {
        assert_eq!(config.level(), LevelFilter::Debug);
    } else {
        assert_eq!(config.level(), LevelFilter::Info);
    }
}

#[test]
fn test_builder() {
    let config = LogConfig::default().with_level(LevelFilter::Warn);
    assert_eq!(config.level(), LevelFilter::Warn);
}

#[test]
fn test_from_vars_unset_keeps_default() {
    let default = LogConfig::default().level();
    assert_eq!(LogConfig::from_vars(None).unwrap().level(), default);
    assert_eq!(LogConfig::from_vars(Some("")).unwrap().level(), default);
}

#[test]
fn test_from_vars_level() {
    assert_eq!(LogConfig::from_vars(Some("trace")).unwrap().level(), LevelFilter::Trace);
    assert_eq!(LogConfig::from_vars(Some("OFF")).unwrap().level(), LevelFilter::Off);
}

#[test]
fn test_from_vars_bad_level_is_error() {
    let err = LogConfig::from_vars(Some("loud")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(LOG_LEVEL_VAR));
    assert!(message.contains("loud"));
}

// the only test in this binary that installs the global logger
#[test]
fn test_init_logger_applies_level() {
    init_logger(&LogConfig::default().with_level(LevelFilter::Warn));
    assert_eq!(log::max_level(), LevelFilter::Warn);
    log::warn!("kept at warn");
}
