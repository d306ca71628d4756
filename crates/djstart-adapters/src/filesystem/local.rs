//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use djstart_core::{application::ports::Filesystem, error::QuickstartResult};

/// Production filesystem implementation backed by `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
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
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> QuickstartResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> QuickstartResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> QuickstartResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> QuickstartResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn list_dir(&self, path: &Path) -> QuickstartResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            children.push(entry.path());
        }
        Ok(children)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> djstart_core::error::QuickstartError {
    djstart_core::application::ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("a.txt");

        fs.write_file(&file, "hello").unwrap();
        assert_eq!(fs.read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn copy_preserves_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");

        fs.write_file(&src, "manifest").unwrap();
        fs.copy_file(&src, &dst).unwrap();
        assert_eq!(fs.read_to_string(&dst).unwrap(), "manifest");
    }

    #[test]
    fn list_dir_returns_immediate_children() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.write_file(&tmp.path().join("one"), "").unwrap();
        fs.create_dir_all(&tmp.path().join("sub")).unwrap();
        fs.write_file(&tmp.path().join("sub/nested"), "").unwrap();

        let mut names: Vec<String> = fs
            .list_dir(tmp.path())
            .unwrap()
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        assert_eq!(names, ["one", "sub"]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn is_dir_distinguishes_files_from_directories() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("f");
        fs.write_file(&file, "").unwrap();

        assert!(fs.is_dir(tmp.path()));
        assert!(!fs.is_dir(&file));
        assert!(fs.exists(&file));
    }
}
