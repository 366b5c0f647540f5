use log::LevelFilter;
use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Route `log` records to stderr. Only used outside the TUI, which owns the terminal.
pub fn init_console_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(get_rust_log_level().into())
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("loan_dashboard=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("loan_dashboard=debug,hyper=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }
}
