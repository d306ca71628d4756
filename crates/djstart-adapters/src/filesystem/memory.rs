//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use djstart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::QuickstartResult,
};

/// In-memory filesystem. Clones share the same backing store, so a test can
/// hand one clone to the service and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.write().expect("lock");
        if let Some(parent) = path.parent() {
            add_dirs(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_owned());
    }

    /// Seed a directory and its parents (testing helper).
    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.inner.write().expect("lock");
        add_dirs(&mut inner.directories, path);
    }

    /// Read a file's content (testing helper).
    pub fn file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.files.get(path).cloned()
    }
}

fn add_dirs(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn poisoned(path: &Path) -> djstart_core::error::QuickstartError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> QuickstartResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;
        add_dirs(&mut inner.directories, path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> QuickstartResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> QuickstartResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> QuickstartResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn list_dir(&self, path: &Path) -> QuickstartResult<Vec<PathBuf>> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        let mut children = BTreeSet::new();
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                children.insert(file.clone());
            }
        }
        for dir in &inner.directories {
            if dir.parent() == Some(path) {
                children.insert(dir.clone());
            }
        }
        Ok(children.into_iter().collect())
    }
}
