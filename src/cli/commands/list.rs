use super::{CommandHandler, CommandResult};
use crate::catalog::{Catalog, Category};
use crate::cli::app::OutputFormat;
use crate::cli::output::{entry_summary_json, render_table, EntryRow};
use crate::Result;
use std::io::Write;

/// Handler for the `list` command
pub struct ListCommand {
    pub category: String,
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let category: Category = self.category.parse()?;
        let entries = catalog.list_by_category(category);

        match self.format {
            OutputFormat::Json => {
                let json: Vec<_> = entries.map(entry_summary_json).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
            }
            OutputFormat::Text => {
                let rows: Vec<EntryRow> = entries.map(EntryRow::from_entry).collect();
                if rows.is_empty() {
                    writeln!(out, "No entries in category '{category}'.")?;
                } else {
                    writeln!(out, "{}", render_table(&rows))?;
                    writeln!(out, "\n{}: {} entries", category.description(), rows.len())?;
                }
            }
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(category: String, format: OutputFormat) -> Self {
        Self { category, format }
    }
}
