pub mod app;
pub mod commands;
pub mod output;

pub use app::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::{dispatch, CommandHandler, CommandResult};
