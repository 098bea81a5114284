use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::Category;

/// Catalog configuration (styleguide.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directories to load example files from, in load order
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,

    /// File extensions to accept (without the dot). Empty accepts any file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Extra directory-name to category mappings
    #[serde(default)]
    pub category_dirs: BTreeMap<String, Category>,
}

fn default_sources() -> Vec<PathBuf> {
    vec![PathBuf::from("samples")]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            extensions: Vec::new(),
            category_dirs: BTreeMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Resolve the category for a directory name
    ///
    /// Configured mappings win over the built-in slugs and source directory names.
    pub fn category_for_dir(&self, dir_name: &str) -> Option<Category> {
        if let Some(category) = self.category_dirs.get(dir_name) {
            return Some(*category);
        }

        Category::ALL
            .into_iter()
            .find(|c| c.slug() == dir_name || c.source_dir() == dir_name)
    }

    /// Check a file against the extension allow-list
    pub fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(e))
            })
            .unwrap_or(false)
    }

    /// Make relative source paths relative to `base`
    pub fn resolve_sources(&mut self, base: &Path) {
        for source in &mut self.sources {
            if source.is_relative() {
                *source = base.join(&*source);
            }
        }
    }
}
