//! Tracing setup.
//!
//! The terminal belongs to the renderer while the program runs, so log
//! output only goes to a file, and only when one is named by
//! `--log-file` or `JULIA_TERM_LOG`. The filter comes from `RUST_LOG`.

use crate::error::AppError;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JULIA_TERM_LOG";

/// The flag wins over the environment variable.
pub fn log_destination(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var_os(LOG_ENV).map(PathBuf::from))
        .filter(|path| !path.as_os_str().is_empty())
}

/// Install a file subscriber. Does nothing without a destination.
pub fn init(destination: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = destination else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence() {
        let path = PathBuf::from("from-flag.log");
        assert_eq!(log_destination(Some(path.clone())), Some(path));
    }

    #[test]
    fn test_empty_path_disables_logging() {
        assert_eq!(log_destination(Some(PathBuf::new())), None);
    }

    #[test]
    fn test_init_without_destination_is_noop() {
        assert!(init(None).is_ok());
    }
}
