//! Runner-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("illegal arguments: {flag} is required")]
    MissingArgument { flag: &'static str },

    #[error("failed to launch {executable}: {source}")]
    LaunchFailed {
        executable: String,
        source: std::io::Error,
    },

    #[error("failed to wait for {executable}: {source}")]
    WaitFailed {
        executable: String,
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    ReportWriteFailed {
        path: String,
        source: std::io::Error,
    },
}

pub type RunnerResult<T> = Result<T, RunnerError>;
