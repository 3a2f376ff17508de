use crate::io::{FileSystem, IoError};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory to search for projects in
pub fn create_test_root() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content, including any parent directories
pub fn create_test_file(root: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = root.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// In-memory [`FileSystem`] for discovery tests. Registering a path also
/// registers all of its ancestors as directories.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    cwd: PathBuf,
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new(cwd: &str) -> Self {
        Self::default().with_cwd(cwd)
    }

    fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = PathBuf::from(cwd);
        self.add_dir(PathBuf::from(cwd));
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_dir(PathBuf::from(path));
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files.insert(path, content.to_string());
        self
    }

    fn add_dir(&mut self, path: PathBuf) {
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn current_dir(&self) -> Result<PathBuf, IoError> {
        Ok(self.cwd.clone())
    }

    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>, IoError> {
        let dirs = self.dirs.iter();
        let files = self.files.keys();
        Ok(dirs
            .chain(files)
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, IoError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::NotFound(path.to_path_buf()))
    }
}
