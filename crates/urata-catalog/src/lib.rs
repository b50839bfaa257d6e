pub mod config;
pub mod error;
pub mod toml_catalog;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use toml_catalog::{CatalogData, TomlCatalog};
