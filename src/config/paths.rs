//! Path resolution for tomo configuration files.
//!
//! All tomo data is stored in `~/.tomo/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TomoError;

/// Paths to tomo configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomo/`
    pub root: PathBuf,
    /// Config file: `~/.tomo/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TomoError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".tomo");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Create the root directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<(), TomoError> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            TomoError::Config(format!(
                "Failed to create directory {}: {e}",
                self.root.display()
            ))
        })
    }
}
