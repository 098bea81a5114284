//! Load summary
//!
//! Malformed units never abort a load. They are collected here and reported
//! once the whole catalog has been built.

use crate::error::MalformedReason;
use crate::CatalogError;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// A source unit that did not make it into the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedUnit {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedUnit {
    pub fn new(path: impl Into<PathBuf>, reason: &MalformedReason) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<CatalogError> for SkippedUnit {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::MalformedEntry { path, reason } => SkippedUnit::new(path, &reason),
            other => SkippedUnit {
                path: PathBuf::new(),
                reason: other.to_string(),
            },
        }
    }
}

/// Outcome of building a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entries successfully loaded
    pub loaded: usize,
    /// Malformed units, in discovery order
    pub skipped: Vec<SkippedUnit>,
    /// Files in directories that map to no category
    pub ignored: Vec<PathBuf>,
    /// Source roots that could not be scanned
    pub missing_roots: Vec<PathBuf>,
}

impl LoadReport {
    pub(crate) fn skip(&mut self, unit: SkippedUnit) {
        warn!("Skipping {}: {}", unit.path.display(), unit.reason);
        self.skipped.push(unit);
    }

    /// True when nothing was skipped and every root was scanned
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.missing_roots.is_empty()
    }

    /// True when units were found but every one of them was malformed
    pub fn all_malformed(&self) -> bool {
        self.loaded == 0 && !self.skipped.is_empty()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Loaded {} entries, skipped {} malformed",
            self.loaded,
            self.skipped.len()
        );
        if !self.ignored.is_empty() {
            summary.push_str(&format!(", ignored {} uncategorized", self.ignored.len()));
        }
        if !self.missing_roots.is_empty() {
            summary.push_str(&format!(
                ", {} source root(s) missing",
                self.missing_roots.len()
            ));
        }
        summary
    }

    pub(crate) fn log(&self) {
        info!(
            loaded = self.loaded,
            skipped = self.skipped.len(),
            ignored = self.ignored.len(),
            "{}",
            self.summary()
        );
    }
}
