//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use barrelize_core::{
    application::ports::{DirEntry, Filesystem},
    error::{BarrelizeError, BarrelizeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_dir(&self, path: &Path) -> BarrelizeResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            // Follows symlinks, so a link to an organized directory is skipped too.
            let is_dir = entry.path().is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk_files(&self, root: &Path) -> BarrelizeResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&path, e.into(), "walk directory")
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).map_err(|_| {
                BarrelizeError::Internal {
                    message: format!(
                        "failed to relativise '{}' against '{}'",
                        entry.path().display(),
                        root.display()
                    ),
                }
            })?;
            files.push(relative.to_path_buf());
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> BarrelizeResult<String> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        // Invalid UTF-8 becomes U+FFFD; export names are ASCII anyway.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn create_dir_all(&self, path: &Path) -> BarrelizeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn rename(&self, from: &Path, to: &Path) -> BarrelizeResult<()> {
        trace!(from = %from.display(), to = %to.display(), "rename");
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "move file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BarrelizeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> BarrelizeResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy");
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BarrelizeError {
    use barrelize_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_dir_is_sorted_and_flags_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("card.tsx"), "").unwrap();
        fs::write(temp.path().join("badge.tsx"), "").unwrap();
        fs::create_dir(temp.path().join("Button")).unwrap();

        let entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();
        assert_eq!(
            entries,
            [
                DirEntry::dir("Button"),
                DirEntry::file("badge.tsx"),
                DirEntry::file("card.tsx"),
            ]
        );
    }

    #[test]
    fn walk_files_returns_relative_files_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("agents/nested")).unwrap();
        fs::write(temp.path().join("settings.json"), "{}").unwrap();
        fs::write(temp.path().join("agents/nested/a.md"), "a").unwrap();

        let files = LocalFilesystem::new().walk_files(temp.path()).unwrap();
        assert_eq!(
            files,
            [
                PathBuf::from("agents/nested/a.md"),
                PathBuf::from("settings.json")
            ]
        );
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let fs_adapter = LocalFilesystem::new();
        let dir = temp.path().join("Button");
        fs_adapter.create_dir_all(&dir).unwrap();
        fs_adapter.create_dir_all(&dir).unwrap();
        assert!(fs_adapter.is_dir(&dir));
    }

    #[test]
    fn missing_file_maps_to_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&temp.path().join("nope.tsx"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("badge.tsx");
        fs::write(&path, b"export const Badge = 1;\xff\xfe").unwrap();

        let content = LocalFilesystem::new().read_to_string(&path).unwrap();
        assert!(content.starts_with("export const Badge = 1;"));
        assert!(content.contains('\u{FFFD}'));
    }
}
