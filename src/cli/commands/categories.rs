use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::app::OutputFormat;
use crate::cli::output::render_table;
use crate::Result;
use serde_json::json;
use std::io::Write;
use tabled::Tabled;

/// Table row for the category overview
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Directory")]
    directory: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

/// Handler for the `categories` command
pub struct CategoriesCommand {
    pub format: OutputFormat,
}

impl CommandHandler for CategoriesCommand {
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let categories = catalog.categories();

        match self.format {
            OutputFormat::Json => {
                let json: Vec<_> = categories
                    .iter()
                    .map(|(category, count)| {
                        json!({
                            "category": category,
                            "description": category.description(),
                            "entries": count,
                        })
                    })
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
            }
            OutputFormat::Text => {
                if categories.is_empty() {
                    writeln!(out, "No categories loaded.")?;
                    return Ok(CommandResult::Success(None));
                }

                let rows: Vec<CategoryRow> = categories
                    .iter()
                    .map(|(category, count)| CategoryRow {
                        category: category.to_string(),
                        directory: category.source_dir().to_string(),
                        description: category.description().to_string(),
                        entries: *count,
                    })
                    .collect();
                writeln!(out, "{}", render_table(&rows))?;
            }
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "categories"
    }
}

impl CategoriesCommand {
    /// Create new categories command
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}
