//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use slnforge_core::application::ApplicationError;
use slnforge_core::application::ports::Filesystem;
use slnforge_core::error::{CoreError, CoreResult};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.parent().map(Path::components).into_iter().flatten() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.files.insert(path, content.into());
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !inner.directories.contains(parent)
        {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "parent directory does not exist".into(),
            }
            .into());
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::FileNotFound { path: path.into() }.into())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> CoreError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_existing_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("a/b.txt")).unwrap(), "x");
    }

    #[test]
    fn seed_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("deep/nested/file.txt", "content");
        assert!(fs.exists(Path::new("deep/nested")));
        assert!(fs.exists(Path::new("deep/nested/file.txt")));
    }

    #[test]
    fn missing_file_reads_as_not_found() {
        let fs = MemoryFilesystem::new();
        let err = fs.read_to_string(Path::new("nope")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::FileNotFound { .. })
        ));
    }
}
