use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::app::OutputFormat;
use crate::Result;
use std::io::Write;

/// Handler for the `check` command
pub struct CheckCommand {
    pub strict: bool,
    pub format: OutputFormat,
}

impl CommandHandler for CheckCommand {
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let report = catalog.report();

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
            }
            OutputFormat::Text => {
                writeln!(out, "{}", report.summary())?;

                if !report.skipped.is_empty() {
                    writeln!(out, "\nSkipped:")?;
                    for unit in &report.skipped {
                        writeln!(out, "  - {}: {}", unit.path.display(), unit.reason)?;
                    }
                }

                if !report.missing_roots.is_empty() {
                    writeln!(out, "\nMissing source roots:")?;
                    for root in &report.missing_roots {
                        writeln!(out, "  - {}", root.display())?;
                    }
                }
            }
        }

        if report.all_malformed() {
            return Ok(CommandResult::LoadFailed(
                "Every example file was malformed".to_string(),
            ));
        }

        if self.strict && !report.is_clean() {
            return Ok(CommandResult::LoadFailed(format!(
                "Strict mode: {} file(s) skipped, {} source root(s) missing",
                report.skipped.len(),
                report.missing_roots.len()
            )));
        }

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "check"
    }
}

impl CheckCommand {
    /// Create new check command
    pub fn new(strict: bool, format: OutputFormat) -> Self {
        Self { strict, format }
    }
}
