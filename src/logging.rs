//! Logging to a file.  The game owns the terminal, so log messages are only
//! ever written to a file named on the command line.
use crate::consts;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that appends to the file at `path`,
/// filtered by the directive in [`LOG_FILTER_VAR`][consts::LOG_FILTER_VAR]
pub(crate) fn init(path: &Path) -> Result<(), LogError> {
    let directive = std::env::var(consts::LOG_FILTER_VAR).ok();
    let filter = build_filter(directive.as_deref())?;
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(LogError::Install)?;
    Ok(())
}

fn build_filter(directive: Option<&str>) -> Result<EnvFilter, LogError> {
    let directive = directive.unwrap_or(consts::DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directive).map_err(LogError::Filter)
}

fn open_log_file(path: &Path) -> Result<fs_err::File, LogError> {
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("invalid ${var} directive", var = consts::LOG_FILTER_VAR)]
    Filter(#[source] tracing_subscriber::filter::ParseError),
    #[error("failed to install log subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter() {
        let filter = build_filter(None).expect("default directive should parse");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn custom_filter() {
        let filter = build_filter(Some("termsnake=trace")).expect("directive should parse");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn bad_filter() {
        let r = build_filter(Some("termsnake=loudly"));
        assert!(matches!(r, Err(LogError::Filter(_))));
    }

    #[test]
    fn log_file_appends() {
        let tmpdir = tempfile::tempdir().expect("should be able to make a temp dir");
        let path = tmpdir.path().join("termsnake.log");
        for line in ["first\n", "second\n"] {
            let mut file = open_log_file(&path).expect("log file should open");
            file.write_all(line.as_bytes())
                .expect("log file should be writable");
        }
        let content = fs_err::read_to_string(&path).expect("log file should be readable");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn log_file_in_missing_dir() {
        let tmpdir = tempfile::tempdir().expect("should be able to make a temp dir");
        let path = tmpdir.path().join("nowhere").join("termsnake.log");
        assert!(matches!(open_log_file(&path), Err(LogError::Open(_))));
    }
}
