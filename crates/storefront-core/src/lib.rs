pub mod app_config;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod defaults;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogEntry, CatalogSnapshot, SnapshotSource};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{ContactLinkBuilder, DEFAULT_CONTACT_BASE_URL};
pub use defaults::default_entries;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
