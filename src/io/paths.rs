use crate::{CatalogError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path management for styleguide configuration files
#[derive(Debug, Clone)]
pub struct StyleguidePaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl StyleguidePaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "styleguide").ok_or_else(|| {
            CatalogError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths for a specific project directory (.styleguide/)
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.join(".styleguide"),
        }
    }

    /// User-level configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }
}
