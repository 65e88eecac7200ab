use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("sheet at {url} produced no catalog entries ({skipped_rows} rows skipped)")]
    EmptyCatalog { url: String, skipped_rows: usize },

    #[error("invalid sheet URL \"{url}\": {reason}")]
    InvalidSheetUrl { url: String, reason: String },
}
