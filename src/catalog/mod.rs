//! Example catalog - load, enumerate and look up style examples
//!
//! # Overview
//!
//! The catalog is built once from one or more source roots and is read-only
//! afterwards:
//!
//! ```text
//! samples/
//!     ├── rails/2.rb     → data-access/2
//!     ├── ruby/1.rb      → style/1
//!     └── testing/6.rb   → testing/6
//! ```
//!
//! Malformed files are skipped and collected in a [`LoadReport`]; a partial
//! catalog is still usable. Lookups are linear scans, which is plenty for a
//! few dozen entries.

mod entry;
mod parser;
mod report;
mod scanner;

pub use entry::{BlockLabel, Category, Entry, EntryId, ExampleBlock};
pub use parser::parse_unit;
pub use report::{LoadReport, SkippedUnit};
pub use scanner::{scan_root, ScanOutcome, SourceUnit};

use crate::config::CatalogConfig;
use crate::error::MalformedReason;
use crate::{CatalogError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// The loaded set of entries across all categories
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    report: LoadReport,
}

impl Catalog {
    /// Load the roots named by the configuration
    pub fn load(config: &CatalogConfig) -> Self {
        Self::load_all(&config.sources, config)
    }

    /// Load every source unit below the given roots
    ///
    /// Never fails as a whole: missing roots and malformed units are recorded
    /// in the report and the remaining units are still loaded.
    pub fn load_all<P: AsRef<Path>>(roots: &[P], config: &CatalogConfig) -> Self {
        let mut catalog = Catalog::default();

        for root in roots {
            let root = root.as_ref();
            let outcome = match scan_root(root, config) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Cannot scan source root: {}", e);
                    catalog.report.missing_roots.push(root.to_path_buf());
                    continue;
                }
            };

            catalog.report.ignored.extend(outcome.ignored);
            for error in outcome.errors {
                catalog.report.skip(error.into());
            }

            for unit in outcome.units {
                catalog.load_unit(unit);
            }
        }

        catalog.report.loaded = catalog.entries.len();
        catalog.report.log();
        catalog
    }

    fn load_unit(&mut self, unit: SourceUnit) {
        if self.find(unit.category, unit.id.as_str()).is_some() {
            let reason = MalformedReason::DuplicateIdentifier(unit.id.to_string());
            self.report.skip(SkippedUnit::new(unit.path, &reason));
            return;
        }

        let text = match std::fs::read_to_string(&unit.path) {
            Ok(text) => text,
            Err(e) => {
                let reason = MalformedReason::Unreadable(e.to_string());
                self.report.skip(SkippedUnit::new(unit.path, &reason));
                return;
            }
        };

        match parse_unit(unit.category, unit.id, &unit.path, &text) {
            Ok(entry) => {
                debug!(
                    "Loaded {}/{} ({} blocks)",
                    entry.category,
                    entry.id,
                    entry.blocks.len()
                );
                self.entries.push(entry);
            }
            Err(e) => self.report.skip(e.into()),
        }
    }

    /// Build a catalog from already-parsed entries
    ///
    /// Later duplicates of a `(category, id)` pair are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut catalog = Catalog::default();
        for entry in entries {
            if catalog.find(entry.category, entry.id.as_str()).is_some() {
                let reason = MalformedReason::DuplicateIdentifier(entry.id.to_string());
                catalog.report.skip(SkippedUnit::new(entry.source, &reason));
                continue;
            }
            catalog.entries.push(entry);
        }
        catalog.report.loaded = catalog.entries.len();
        catalog
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Entries of one category in insertion order
    ///
    /// The iterator is lazy and can be cloned or re-created to walk the
    /// same sequence again.
    pub fn list_by_category(&self, category: Category) -> CategoryIter<'_> {
        CategoryIter {
            inner: self.entries.iter(),
            category,
        }
    }

    /// Look up one entry
    pub fn get(&self, category: Category, id: &str) -> Result<&Entry> {
        self.find(category, id).ok_or_else(|| CatalogError::NotFound {
            category: category.to_string(),
            identifier: id.to_string(),
        })
    }

    /// Look up one entry by category name (slug or directory alias)
    pub fn lookup(&self, category: &str, id: &str) -> Result<&Entry> {
        self.get(category.parse()?, id)
    }

    fn find(&self, category: Category, id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.id.as_str() == id)
    }

    /// Categories that have entries, with their entry counts
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.list_by_category(c).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Case-insensitive search over titles, commentary and code
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.matches(query)).collect()
    }
}

/// Lazy iterator over the entries of one category
#[derive(Debug, Clone)]
pub struct CategoryIter<'a> {
    inner: std::slice::Iter<'a, Entry>,
    category: Category,
}

impl<'a> Iterator for CategoryIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let category = self.category;
        self.inner.by_ref().find(|e| e.category == category)
    }
}
