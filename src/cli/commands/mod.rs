pub mod categories;
pub mod check;
pub mod list;
pub mod search;
pub mod show;

use super::app::{Commands, OutputFormat};
use crate::catalog::Catalog;
use crate::{CatalogError, Result};
use std::io::Write;
use tracing::debug;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against a loaded catalog, writing to `out`
    fn execute(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Lookup of an unknown category or entry
    NotFound(String),
    /// Nothing usable could be loaded
    LoadFailed(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::NotFound(_) => 1,
            CommandResult::LoadFailed(_) => 2,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::NotFound(msg) => Some(msg),
            CommandResult::LoadFailed(msg) => Some(msg),
        }
    }

    /// Classify a command error: lookup misses are recoverable, the rest are load failures
    pub fn from_error(error: &CatalogError) -> Self {
        if error.is_not_found() {
            CommandResult::NotFound(error.to_string())
        } else {
            CommandResult::LoadFailed(error.to_string())
        }
    }
}

/// Build the handler for a parsed command
pub fn handler_for(command: &Commands, format: OutputFormat) -> Box<dyn CommandHandler> {
    match command {
        Commands::List { category } => Box::new(list::ListCommand::new(category.clone(), format)),
        Commands::Show { category, id } => {
            Box::new(show::ShowCommand::new(category.clone(), id.clone(), format))
        }
        Commands::Search { query, category } => Box::new(search::SearchCommand::new(
            query.clone(),
            category.clone(),
            format,
        )),
        Commands::Categories => Box::new(categories::CategoriesCommand::new(format)),
        Commands::Check { strict } => Box::new(check::CheckCommand::new(*strict, format)),
    }
}

/// Run a command and fold its errors into a `CommandResult`
pub fn dispatch(
    command: &Commands,
    format: OutputFormat,
    catalog: &Catalog,
    out: &mut dyn Write,
) -> CommandResult {
    let report = catalog.report();
    if report.all_malformed() && !command.tolerates_failed_load() {
        return CommandResult::LoadFailed(format!(
            "No entries could be loaded: {}",
            report.summary()
        ));
    }

    let handler = handler_for(command, format);
    debug!("Executing '{}' command", handler.name());

    handler
        .execute(catalog, out)
        .unwrap_or_else(|e| CommandResult::from_error(&e))
}
