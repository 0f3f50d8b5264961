use scriptpad_core::config::types::{LoggingConfig, ResolvedConfig};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Install the global subscriber: stderr always, plus the log file if configured.
///
/// A log file that cannot be opened is reported and skipped.
pub fn init(cfg: &ResolvedConfig) {
    let log = &cfg.logging;
    let stderr_level = parse_level(&log.level).unwrap_or(LevelFilter::INFO);

    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let file = log.file.as_deref().and_then(|path| match open_log_file(path) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            None
        }
    });

    let Some(file) = file else {
        let _ = registry.try_init();
        return;
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Keep the worker alive for the whole process so buffered lines are flushed.
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter(log));

    let _ = registry.with(file_layer).try_init();
}

fn file_filter(log: &LoggingConfig) -> EnvFilter {
    let level_str = log.file_level.as_deref().unwrap_or(&log.level);
    let level = parse_level(level_str).unwrap_or(LevelFilter::DEBUG);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("invalid"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("spad.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
