#![cfg(feature = "std")]
//! Stderr logger for the `broadside` binary. Stdout is reserved for boards
//! and JSON reports.

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV_VAR: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // `broadside::board` -> `board`
            let module = record.target().rsplit("::").next().unwrap_or("");
            eprintln!("{:<5} [{}] {}", record.level(), module, record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Map a level setting to a filter. Accepts level names in any case
/// (`warn`, `DEBUG`) or a verbosity digit from `0` (off) to `5` (trace).
/// Unset or unrecognised values fall back to `info`.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    let Some(value) = value.map(str::trim) else {
        return LevelFilter::Info;
    };
    match value.parse::<usize>() {
        Ok(n) => LevelFilter::iter().nth(n).unwrap_or(LevelFilter::Trace),
        Err(_) => value.parse().unwrap_or(LevelFilter::Info),
    }
}

/// Install the stderr logger with the level from `BROADSIDE_LOG`.
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = parse_log_level(env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
