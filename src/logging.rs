use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use std::path::Path;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),

    #[error("Invalid logger configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),

    #[error("Logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Level from `RUST_LOG` when set, otherwise the configured one.
pub fn resolve_log_level(configured: &str) -> LevelFilter {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LevelFilter {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .trim()
        .to_lowercase();

    match level_str.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to info if parsing fails
    }
}

/// Routes the `log` macros to a file; the terminal belongs to the dashboard.
pub fn init_file_logging(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("file").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_rust_log_level("info"), LevelFilter::Info);
        assert_eq!(parse_rust_log_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_rust_log_level("error"), LevelFilter::Error);
        assert_eq!(parse_rust_log_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_rust_log_level("off"), LevelFilter::Off);

        // Test with module-specific formats
        assert_eq!(
            parse_rust_log_level("weather_dashboard=debug"),
            LevelFilter::Debug
        );
        assert_eq!(
            parse_rust_log_level("weather_dashboard=debug,polars=info"),
            LevelFilter::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LevelFilter::Info);
    }
}
