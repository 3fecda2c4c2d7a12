//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `barrelize-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::CommandInvocation;
use crate::error::BarrelizeResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `barrelize_adapters::filesystem::LocalFilesystem` (production)
/// - `barrelize_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List the immediate children of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> BarrelizeResult<Vec<DirEntry>>;

    /// Every file below `root` as a path relative to `root`, sorted.
    fn walk_files(&self, root: &Path) -> BarrelizeResult<Vec<PathBuf>>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> BarrelizeResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BarrelizeResult<()>;

    /// Move a file.
    fn rename(&self, from: &Path, to: &Path) -> BarrelizeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> BarrelizeResult<()>;

    /// Copy a single file.
    fn copy_file(&self, from: &Path, to: &Path) -> BarrelizeResult<()>;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for running child processes with inherited stdio.
///
/// Implemented by `barrelize_adapters::process::SystemCommandRunner`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run to completion and return the exit code.
    ///
    /// A process killed by a signal reports `1`.
    fn run(&self, invocation: &CommandInvocation) -> BarrelizeResult<i32>;
}
