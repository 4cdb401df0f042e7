//! Error types for logmark-build operations.
//!
//! This module defines [`LogmarkBuildError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LogmarkBuildError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LogmarkBuildError::Other`) for unexpected errors
//! - Subprocess failures carry the child's exit code so the process can
//!   terminate with the same status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for logmark-build operations.
#[derive(Debug, Error)]
pub enum LogmarkBuildError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A required tool is missing and cannot be bootstrapped.
    #[error("'{tool}' is not available: {hint}")]
    ToolUnavailable { tool: String, hint: String },

    /// The install subprocess exited non-zero.
    #[error("Installing '{tool}' failed with exit code {code:?}")]
    InstallFailed { tool: String, code: Option<i32> },

    /// The build subprocess exited non-zero.
    #[error("'{tool}' build failed with exit code {code:?}")]
    BuildFailed { tool: String, code: Option<i32> },

    /// The dev-server subprocess exited non-zero.
    #[error("'{tool}' serve exited with code {code:?}")]
    ServeFailed { tool: String, code: Option<i32> },

    /// A subprocess could not be spawned at all.
    #[error("Failed to run '{command}': {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogmarkBuildError {
    /// The process exit status this error should terminate with.
    ///
    /// Install and build failures propagate the subprocess's own exit code
    /// (1 when the child was killed by a signal). Everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LogmarkBuildError::InstallFailed { code, .. }
            | LogmarkBuildError::BuildFailed { code, .. }
            | LogmarkBuildError::ServeFailed { code, .. } => match code {
                Some(c) if *c > 0 => *c,
                _ => 1,
            },
            _ => 1,
        }
    }
}

/// Result type alias for logmark-build operations.
pub type Result<T> = std::result::Result<T, LogmarkBuildError>;
