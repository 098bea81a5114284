//! Catalog entry model
//!
//! An entry is one documented convention: a run of example blocks
//! ("Bad", "Good", "Better", "Best", or a free-form heading) plus the
//! prose that introduces them.

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Convention domain an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Data-access patterns (query objects, scopes, controller lookups)
    DataAccess,
    /// General code style
    Style,
    /// Test-writing style
    Testing,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::DataAccess, Category::Style, Category::Testing];

    /// Canonical kebab-case name
    pub fn slug(&self) -> &'static str {
        match self {
            Category::DataAccess => "data-access",
            Category::Style => "style",
            Category::Testing => "testing",
        }
    }

    /// Directory name the samples for this category are kept under
    pub fn source_dir(&self) -> &'static str {
        match self {
            Category::DataAccess => "rails",
            Category::Style => "ruby",
            Category::Testing => "testing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::DataAccess => "Data-access patterns",
            Category::Style => "General code style",
            Category::Testing => "Test-writing style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the canonical slug or the source directory alias
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.source_dir() == needle)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Position-derived identifier of an entry within its category
///
/// Numeric identifiers order numerically, so `10` follows `9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for EntryId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EntryId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Role of an example block, taken from its `##` heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockLabel {
    Bad,
    Good,
    Better,
    Best,
    /// Any other heading, e.g. "OK for guard clauses"
    Alternative,
}

impl BlockLabel {
    /// Classify a heading by its first word, ignoring case and trailing punctuation
    pub fn from_heading(heading: &str) -> Self {
        let first = heading
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_end_matches(|c: char| !c.is_alphanumeric())
            .to_ascii_lowercase();

        match first.as_str() {
            "bad" => BlockLabel::Bad,
            "good" => BlockLabel::Good,
            "better" => BlockLabel::Better,
            "best" => BlockLabel::Best,
            _ => BlockLabel::Alternative,
        }
    }

    /// Position in the Good < Better < Best progression
    pub fn rank(&self) -> Option<u8> {
        match self {
            BlockLabel::Good => Some(1),
            BlockLabel::Better => Some(2),
            BlockLabel::Best => Some(3),
            BlockLabel::Bad | BlockLabel::Alternative => None,
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, BlockLabel::Bad)
    }
}

/// One delimited snippet inside an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleBlock {
    pub label: BlockLabel,

    /// Heading text as authored, without the `##` marker
    pub heading: String,

    /// Section heading in force when the block started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Code lines, verbatim
    pub lines: Vec<String>,
}

impl ExampleBlock {
    pub fn code(&self) -> String {
        self.lines.join("\n")
    }

    fn mentions(&self, needle: &str) -> bool {
        self.heading.to_lowercase().contains(needle)
            || self
                .section
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
            || self.lines.iter().any(|l| l.to_lowercase().contains(needle))
    }
}

/// A loaded catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub category: Category,
    pub id: EntryId,

    /// Unit the entry was read from
    pub source: PathBuf,

    pub blocks: Vec<ExampleBlock>,

    /// Preamble prose and section headings
    #[serde(default)]
    pub commentary: Vec<String>,
}

impl Entry {
    /// First section heading, or "<category> #<id>"
    pub fn title(&self) -> String {
        self.blocks
            .iter()
            .find_map(|b| b.section.clone())
            .or_else(|| self.commentary.first().cloned())
            .unwrap_or_else(|| format!("{} #{}", self.category, self.id))
    }

    /// Blocks showing the discouraged pattern
    pub fn bad_examples(&self) -> impl Iterator<Item = &ExampleBlock> {
        self.blocks.iter().filter(|b| b.label.is_bad())
    }

    /// Blocks showing preferred or acceptable forms
    pub fn good_examples(&self) -> impl Iterator<Item = &ExampleBlock> {
        self.blocks.iter().filter(|b| !b.label.is_bad())
    }

    /// Highest-ranked preferred block, if any is ranked
    pub fn best_example(&self) -> Option<&ExampleBlock> {
        self.good_examples()
            .filter(|b| b.label.rank().is_some())
            .max_by_key(|b| b.label.rank())
    }

    /// Case-insensitive substring match over title, commentary and blocks
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title().to_lowercase().contains(&needle)
            || self
                .commentary
                .iter()
                .any(|c| c.to_lowercase().contains(&needle))
            || self.blocks.iter().any(|b| b.mentions(&needle))
    }
}
