//! Source discovery
//!
//! Walks a source root and turns every candidate file into a `SourceUnit`.
//! The category comes from the directory a file sits in; the identifier
//! from its file stem.

use super::entry::{Category, EntryId};
use crate::config::CatalogConfig;
use crate::error::MalformedReason;
use crate::{CatalogError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// A file that will be parsed into at most one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub category: Category,
    pub id: EntryId,
}

/// Everything found below one source root
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Units in visit order
    pub units: Vec<SourceUnit>,
    /// Files in directories that map to no category
    pub ignored: Vec<PathBuf>,
    /// Walk failures, reported as unreadable units
    pub errors: Vec<CatalogError>,
}

/// Scan a source root recursively
///
/// Directories and files are visited in `EntryId` order so that `10.rb`
/// follows `9.rb`. Hidden files and directories are skipped.
pub fn scan_root(root: &Path, config: &CatalogConfig) -> Result<ScanOutcome> {
    if !root.exists() {
        return Err(CatalogError::Config(format!(
            "Source root does not exist: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(CatalogError::Config(format!(
            "Source root is not a directory: {}",
            root.display()
        )));
    }

    info!("Scanning for example files in: {:?}", root);

    let mut outcome = ScanOutcome::default();
    let mut warned_dirs = BTreeSet::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| sort_key(a).cmp(&sort_key(b)))
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                outcome.errors.push(CatalogError::MalformedEntry {
                    path,
                    reason: MalformedReason::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !config.accepts_extension(path) {
            debug!("Skipping file with unlisted extension: {:?}", path);
            continue;
        }

        let Some(dir) = path.parent() else {
            continue;
        };
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(category) = config.category_for_dir(&dir_name) else {
            if warned_dirs.insert(dir.to_path_buf()) {
                warn!(
                    "Ignoring files in {:?}: directory '{}' maps to no category",
                    dir, dir_name
                );
            }
            outcome.ignored.push(path.to_path_buf());
            continue;
        };

        let Some(stem) = path.file_stem() else {
            continue;
        };

        debug!("Found example file: {:?}", path);
        outcome.units.push(SourceUnit {
            path: path.to_path_buf(),
            category,
            id: EntryId::new(stem.to_string_lossy()),
        });
    }

    info!(
        "Scan complete: found {} example files ({} ignored)",
        outcome.units.len(),
        outcome.ignored.len()
    );

    Ok(outcome)
}

fn sort_key(entry: &DirEntry) -> EntryId {
    let path = entry.path();
    let name = if entry.file_type().is_file() {
        path.file_stem()
    } else {
        path.file_name()
    };
    EntryId::new(name.unwrap_or_default().to_string_lossy())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "## Good\nx\n").unwrap();
    }

    fn ids(outcome: &ScanOutcome) -> Vec<String> {
        outcome
            .units
            .iter()
            .map(|u| format!("{}/{}", u.category, u.id))
            .collect()
    }

    #[test]
    fn test_scan_maps_directories_to_categories() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "rails/2.rb");
        write(temp_dir.path(), "ruby/1.rb");
        write(temp_dir.path(), "testing/6.rb");

        let outcome = scan_root(temp_dir.path(), &CatalogConfig::default()).unwrap();

        assert_eq!(
            ids(&outcome),
            vec!["data-access/2", "style/1", "testing/6"]
        );
        assert!(outcome.ignored.is_empty());
    }

    #[test]
    fn test_scan_orders_numerically() {
        let temp_dir = TempDir::new().unwrap();
        for n in ["10", "9", "1", "2"] {
            write(temp_dir.path(), &format!("testing/{n}.rb"));
        }

        let outcome = scan_root(temp_dir.path(), &CatalogConfig::default()).unwrap();

        assert_eq!(
            ids(&outcome),
            vec!["testing/1", "testing/2", "testing/9", "testing/10"]
        );
    }

    #[test]
    fn test_scan_ignores_unmapped_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "testing/1.rb");
        write(temp_dir.path(), "drafts/1.rb");
        write(temp_dir.path(), "testing/.2.rb.swp");
        write(temp_dir.path(), ".git/testing/3.rb");

        let outcome = scan_root(temp_dir.path(), &CatalogConfig::default()).unwrap();

        assert_eq!(ids(&outcome), vec!["testing/1"]);
        assert_eq!(outcome.ignored, vec![temp_dir.path().join("drafts/1.rb")]);
    }

    #[test]
    fn test_scan_filters_extensions() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "style/1.rb");
        write(temp_dir.path(), "style/2.md");

        let config = CatalogConfig {
            extensions: vec!["md".to_string()],
            ..CatalogConfig::default()
        };
        let outcome = scan_root(temp_dir.path(), &config).unwrap();

        assert_eq!(ids(&outcome), vec!["style/2"]);
    }

    #[test]
    fn test_scan_root_can_be_a_category_directory() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "rails/3.rb");

        let outcome =
            scan_root(&temp_dir.path().join("rails"), &CatalogConfig::default()).unwrap();

        assert_eq!(ids(&outcome), vec!["data-access/3"]);
    }

    #[test]
    fn test_scan_nonexistent_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_root(&temp_dir.path().join("missing"), &CatalogConfig::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
