use broadside::{init_logging, level_from, DEFAULT_LEVEL, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(Some("debug"), LevelFilter::Warn), LevelFilter::Debug);
    assert_eq!(level_from(Some("OFF"), LevelFilter::Warn), LevelFilter::Off);
    assert_eq!(level_from(Some("loud"), LevelFilter::Warn), LevelFilter::Warn);
    assert_eq!(level_from(None, LevelFilter::Info), LevelFilter::Info);
}

#[test]
fn test_init_logging_defaults_to_info() {
    assert_eq!(DEFAULT_LEVEL, LevelFilter::Info);
    std::env::remove_var(LOG_ENV);
    init_logging();
    init_logging();
    assert_eq!(log::max_level(), LevelFilter::Info);
    log::info!("logger installed");
}
