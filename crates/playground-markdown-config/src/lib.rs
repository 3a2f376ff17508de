use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User settings. Every field is optional in the file and falls back to the
/// values used for Swift playgrounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix marking a documentation line.
    pub marker: String,
    /// Language tag written on opening code fences.
    pub code_language_tag: String,
    /// Directory extension identifying a project.
    pub project_extension: String,
    /// Source file read from inside the project directory.
    pub contents_file: String,
    /// Directory searched when no path is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: "//:".to_string(),
            code_language_tag: "swift".to_string(),
            project_extension: "playground".to_string(),
            contents_file: "Contents.swift".to_string(),
            search_path: None,
        }
    }
}

impl Config {
    /// Location of the user config file, `~/.config/playground-markdown/config.toml`.
    pub fn config_path() -> PathBuf {
        let path = shellexpand::tilde("~/.config/playground-markdown/config.toml");
        PathBuf::from(path.as_ref())
    }

    /// Load the user config file. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse settings read from `path` and expand `~` and `$VARS` in the
    /// search path.
    fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.search_path = config.search_path.map(expand_search_path);
        Ok(config)
    }

    /// Write the user config file.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path();
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)
    }
}

/// Unresolvable variables leave the path as written.
fn expand_search_path(path: PathBuf) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path,
    }
}
