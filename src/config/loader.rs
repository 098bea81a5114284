use super::types::CatalogConfig;
use crate::io::StyleguidePaths;
use crate::{CatalogError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "STYLEGUIDE_CONFIG";

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "styleguide.yaml";

/// Configuration loader with layered discovery
///
/// Resolution order:
/// 1. Explicit path (`--config`)
/// 2. `STYLEGUIDE_CONFIG`
/// 3. `styleguide.yaml` in the project root
/// 4. `config.yaml` in the user configuration directory
/// 5. Built-in defaults
pub struct ConfigLoader {
    project_root: PathBuf,
    explicit: Option<PathBuf>,
    user_paths: Option<StyleguidePaths>,
}

impl ConfigLoader {
    /// Create a loader rooted at the current directory
    pub fn new() -> Result<Self> {
        let project_root = std::env::current_dir().map_err(|e| {
            CatalogError::Config(format!("Failed to get current directory: {}", e))
        })?;
        Ok(Self::for_project(project_root))
    }

    /// Create a loader rooted at a specific project directory
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            explicit: None,
            user_paths: StyleguidePaths::new().ok(),
        }
    }

    /// Use this file instead of discovering one
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Override the user configuration directory
    pub fn with_user_paths(mut self, paths: Option<StyleguidePaths>) -> Self {
        self.user_paths = paths;
        self
    }

    /// Find the configuration file to use, if any
    pub fn discover(&self) -> Result<Option<PathBuf>> {
        self.discover_with_env(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn discover_with_env(&self, env_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
        if let Some(path) = self.explicit.clone().or(env_path) {
            if !path.is_file() {
                return Err(CatalogError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            debug!("Using configuration override: {:?}", path);
            return Ok(Some(path));
        }

        let project_file = self.project_root.join(PROJECT_CONFIG_FILE);
        if project_file.is_file() {
            debug!("Found project configuration: {:?}", project_file);
            return Ok(Some(project_file));
        }

        if let Some(paths) = &self.user_paths {
            let user_file = paths.config_file();
            if user_file.is_file() {
                debug!("Found user configuration: {:?}", user_file);
                return Ok(Some(user_file));
            }
        }

        Ok(None)
    }

    /// Load the effective configuration
    ///
    /// Relative `sources` are resolved against the directory of the file that
    /// declared them, or the project root for the defaults.
    pub fn load(&self) -> Result<CatalogConfig> {
        match self.discover()? {
            Some(path) => Self::load_file(&path),
            None => {
                debug!("No configuration file found, using defaults");
                let mut config = CatalogConfig::default();
                config.resolve_sources(&self.project_root);
                Ok(config)
            }
        }
    }

    /// Load and resolve a configuration file
    pub fn load_file(path: &Path) -> Result<CatalogConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: CatalogConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to parse configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        if config.sources.is_empty() {
            return Err(CatalogError::Config(format!(
                "Configuration file {} lists no sources",
                path.display()
            )));
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_sources(base);

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
