use crate::engine::ConfigError;
use std::io;
use structopt::clap::{self, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// `-h` / `-V` output; not a failure.
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Cli(clap::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("display error: {0}")]
    Display(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl From<clap::Error> for AppError {
    fn from(err: clap::Error) -> Self {
        match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => AppError::Usage(err.message),
            _ => AppError::Cli(err),
        }
    }
}

impl AppError {
    /// Process exit status: 0 after help, 2 for a refused configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) => 0,
            AppError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Text written to stderr before exiting.
    pub fn report(&self) -> String {
        match self {
            AppError::Usage(text) => text.clone(),
            AppError::Cli(err) => err.message.clone(),
            AppError::Config(err) => format!("error: {}", err),
            other => format!("julia-term: {}", other),
        }
    }
}
