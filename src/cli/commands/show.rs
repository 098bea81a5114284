use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::app::OutputFormat;
use crate::cli::output::{entry_json, write_entry};
use crate::Result;
use std::io::Write;

/// Handler for the `show` command
pub struct ShowCommand {
    pub category: String,
    pub id: String,
    pub format: OutputFormat,
}

impl CommandHandler for ShowCommand {
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let entry = catalog.lookup(&self.category, &self.id)?;

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&entry_json(entry))?)?;
            }
            OutputFormat::Text => write_entry(out, entry)?,
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(category: String, id: String, format: OutputFormat) -> Self {
        Self {
            category,
            id,
            format,
        }
    }
}
