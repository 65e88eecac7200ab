pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
mod rate_limit;
pub mod service;

pub use client::SheetClient;
pub use error::IngestError;
pub use normalize::normalize_image_reference;
pub use parse::{parse_catalog, ParsedCatalog};
pub use service::{CatalogService, RefreshOutcome};
