//! styleguide - a read-only catalog of bad/good code-style examples

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use catalog::{Catalog, Category, Entry, EntryId};
pub use error::{CatalogError, MalformedReason, Result};
