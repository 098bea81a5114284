use super::{CommandHandler, CommandResult};
use crate::catalog::{Catalog, Category, Entry};
use crate::cli::app::OutputFormat;
use crate::cli::output::{entry_summary_json, render_table, EntryRow};
use crate::Result;
use std::io::Write;

/// Handler for the `search` command
pub struct SearchCommand {
    pub query: String,
    pub category: Option<String>,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;

        let mut results: Vec<&Entry> = catalog.search(&self.query);
        if let Some(category) = category {
            results.retain(|entry| entry.category == category);
        }

        match self.format {
            OutputFormat::Json => {
                let json: Vec<_> = results.iter().map(|e| entry_summary_json(e)).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
            }
            OutputFormat::Text => {
                if results.is_empty() {
                    writeln!(out, "No entries found.")?;
                } else {
                    let rows: Vec<EntryRow> =
                        results.iter().map(|e| EntryRow::from_entry(e)).collect();
                    writeln!(out, "Found {} entries:\n", rows.len())?;
                    writeln!(out, "{}", render_table(&rows))?;
                }
            }
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(query: String, category: Option<String>, format: OutputFormat) -> Self {
        Self {
            query,
            category,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::tests::sample_catalog;
    use crate::CatalogError;

    fn run(query: &str, category: Option<&str>, format: OutputFormat) -> Result<String> {
        let mut out = Vec::new();
        SearchCommand::new(query.to_string(), category.map(String::from), format)
            .execute(&sample_catalog(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_search_matches_code() {
        let text = run("geosquare", None, OutputFormat::Text).unwrap();

        assert!(text.starts_with("Found 1 entries:"));
        assert!(text.contains("data-access #3"));
    }

    #[test]
    fn test_search_with_category_filter() {
        let text = run("recipe", Some("style"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["category"], "style");
    }

    #[test]
    fn test_search_no_results() {
        let text = run("nothing matches this", None, OutputFormat::Text).unwrap();
        assert_eq!(text, "No entries found.\n");
    }

    #[test]
    fn test_search_unknown_category() {
        let err = run("recipe", Some("frontend"), OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
    }
}
