#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Writes records to stderr, keeping stdout for game output and JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level (`error`, `warn`, `info`,
/// `debug`, `trace`, `off`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Parse a level name, falling back to `default` when absent or invalid.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Level used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the logger with the level from [`LOG_ENV`].
/// Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref(), DEFAULT_LEVEL);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
