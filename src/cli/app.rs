use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// styleguide: browse bad/good code-style examples
#[derive(Parser, Debug)]
#[command(name = "styleguide")]
#[command(version)]
#[command(about = "Browse a catalog of bad/good code-style examples")]
#[command(
    long_about = "styleguide loads convention examples (## Bad / ## Good snippets) from source directories and lets you list, show and search them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source directory to load examples from (repeatable, overrides configuration)
    #[arg(long = "source", global = true)]
    pub sources: Vec<PathBuf>,

    /// Configuration file path (default: discovered styleguide.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Set log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the entries of a category
    List {
        /// Category name (data-access, style, testing, or a source directory name)
        category: String,
    },

    /// Show one entry with all of its examples
    Show {
        /// Category name
        category: String,

        /// Entry identifier within the category
        id: String,
    },

    /// Search entries by text
    Search {
        /// Text to look for in titles, commentary and code
        query: String,

        /// Restrict results to one category
        #[arg(long)]
        category: Option<String>,
    },

    /// List categories and their entry counts
    Categories,

    /// Load the catalog and report malformed files
    Check {
        /// Exit non-zero if any file was skipped
        #[arg(short, long)]
        strict: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Search { .. } => "search",
            Commands::Categories => "categories",
            Commands::Check { .. } => "check",
        }
    }

    /// Whether the command can still do useful work on an empty catalog
    pub fn tolerates_failed_load(&self) -> bool {
        matches!(self, Commands::Check { .. })
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
