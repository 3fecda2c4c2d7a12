//! Application layer errors.
//!
//! These errors represent failures in orchestration (I/O, child processes),
//! not invalid input. Input problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A required input directory is missing.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The generator ran and exited unsuccessfully.
    #[error("`{command}` exited with code {code}")]
    GeneratorFailed { command: String, code: i32 },

    /// The generator could not be started at all.
    #[error("Failed to start `{command}`: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Fake adapter state lock poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files moved before the failure stay organized; re-run to finish the rest".into(),
            ],
            Self::DirectoryNotFound { path } => vec![
                format!("'{}' does not exist or is not a directory", path.display()),
                "Run the command from your project root".into(),
                "Or pass the directory explicitly (see --help)".into(),
            ],
            Self::GeneratorFailed { command, .. } => vec![
                format!("`{}` did not succeed", command),
                "Check the generator output above for details".into(),
                "No files were reorganized".into(),
            ],
            Self::SpawnFailed { command, .. } => vec![
                format!("Could not run `{}`", command),
                "Ensure the program is installed and in your PATH".into(),
                "Or change [generator].program in your config file".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::DirectoryNotFound { .. } => ErrorCategory::NotFound,
            Self::GeneratorFailed { .. } => ErrorCategory::External,
            Self::SpawnFailed { .. } => ErrorCategory::Internal,
        }
    }
}
