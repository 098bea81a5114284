pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_ENV, PROJECT_CONFIG_FILE};
pub use types::CatalogConfig;
