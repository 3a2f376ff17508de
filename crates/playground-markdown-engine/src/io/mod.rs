use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid search directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("No .{extension} project found under {root}")]
    NoProject { root: PathBuf, extension: String },
}

/// The filesystem capabilities needed to locate and load a playground.
pub trait FileSystem {
    fn current_dir(&self) -> Result<PathBuf, IoError>;
    /// Immediate children of `dir`, in no particular order.
    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>, IoError>;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String, IoError>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> Result<PathBuf, IoError> {
        std::env::current_dir().map_err(IoError::Io)
    }

    fn list_children(&self, dir: &Path) -> Result<Vec<PathBuf>, IoError> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir).map_err(IoError::Io)? {
            let entry = entry.map_err(IoError::Io)?;
            children.push(entry.path());
        }
        Ok(children)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, IoError> {
        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(IoError::Io)
    }
}

/// Find the first directory below `root` whose extension is `extension`.
///
/// Children are visited depth-first in sorted order. `root` itself is never
/// a match, and matching directories are not searched further.
pub fn find_project(
    fs: &impl FileSystem,
    root: &Path,
    extension: &str,
) -> Result<PathBuf, IoError> {
    validate_root(fs, root)?;

    match find_project_recursive(fs, root, extension)? {
        Some(project) => {
            log::info!("Found project {}", project.display());
            Ok(project)
        }
        None => Err(IoError::NoProject {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        }),
    }
}

fn find_project_recursive(
    fs: &impl FileSystem,
    dir: &Path,
    extension: &str,
) -> Result<Option<PathBuf>, IoError> {
    let mut children = fs.list_children(dir)?;
    children.sort();

    for child in children {
        if !fs.is_dir(&child) {
            continue;
        }
        if let Some(ext) = child.extension()
            && ext == extension
        {
            return Ok(Some(child));
        }
        log::debug!("Searching {}", child.display());
        if let Some(found) = find_project_recursive(fs, &child, extension)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Locate the project below `root` and read its contents file.
pub fn load_project_source(
    fs: &impl FileSystem,
    root: &Path,
    extension: &str,
    contents_file: &RelativePath,
) -> Result<String, IoError> {
    let project = find_project(fs, root, extension)?;
    let contents_path = contents_file.to_path(&project);
    log::debug!("Reading {}", contents_path.display());
    fs.read_to_string(&contents_path)
}

pub fn validate_root(fs: &impl FileSystem, root: &Path) -> Result<(), IoError> {
    if !fs.is_dir(root) {
        return Err(IoError::InvalidRoot(root.to_path_buf()));
    }

    Ok(())
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}
