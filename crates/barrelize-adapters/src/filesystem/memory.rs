//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use barrelize_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::BarrelizeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> BarrelizeResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(not_found(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dirs(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Seed an empty directory (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dirs(path.as_ref());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_dir(&self, path: &Path) -> BarrelizeResult<Vec<DirEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory does not exist"));
        }

        let child_name = |p: &Path| {
            (p.parent() == Some(path))
                .then(|| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .flatten()
        };

        let mut entries: Vec<DirEntry> = inner
            .directories
            .iter()
            .filter_map(|d| child_name(d.as_path()).map(DirEntry::dir))
            .chain(
                inner
                    .files
                    .keys()
                    .filter_map(|f| child_name(f.as_path()).map(DirEntry::file)),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk_files(&self, root: &Path) -> BarrelizeResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> BarrelizeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File does not exist"))
    }

    fn create_dir_all(&self, path: &Path) -> BarrelizeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert_dirs(path);
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> BarrelizeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.require_parent(to)?;
        let content = inner
            .files
            .remove(from)
            .ok_or_else(|| not_found(from, "File does not exist"))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BarrelizeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.require_parent(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> BarrelizeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.require_parent(to)?;
        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| not_found(from, "File does not exist"))?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn not_found(path: &Path, reason: &str) -> barrelize_core::error::BarrelizeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_dir_lists_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("ui/button.tsx", "");
        fs.add_file("ui/Card/Card.tsx", "");

        let entries = fs.read_dir(Path::new("ui")).unwrap();
        assert_eq!(entries, [DirEntry::dir("Card"), DirEntry::file("button.tsx")]);
    }

    #[test]
    fn rename_requires_target_directory() {
        let fs = MemoryFilesystem::new();
        fs.add_file("ui/button.tsx", "x");

        assert!(
            fs.rename(Path::new("ui/button.tsx"), Path::new("ui/Button/Button.tsx"))
                .is_err()
        );

        fs.create_dir_all(Path::new("ui/Button")).unwrap();
        fs.rename(Path::new("ui/button.tsx"), Path::new("ui/Button/Button.tsx"))
            .unwrap();
        assert_eq!(fs.read_file("ui/Button/Button.tsx").as_deref(), Some("x"));
        assert!(fs.read_file("ui/button.tsx").is_none());
    }

    #[test]
    fn walk_files_is_relative_to_root() {
        let fs = MemoryFilesystem::new();
        fs.add_file(".claude/settings.json", "{}");
        fs.add_file(".claude/agents/a.md", "");
        fs.add_file("other/file", "");

        assert_eq!(
            fs.walk_files(Path::new(".claude")).unwrap(),
            [PathBuf::from("agents/a.md"), PathBuf::from("settings.json")]
        );
    }
}
