//! HTTP client for the catalog spreadsheet's CSV export.

mod export;

use std::time::Duration;

use reqwest::Client;
use storefront_core::AppConfig;

use crate::error::IngestError;
use crate::parse::{parse_catalog, ParsedCatalog};
use crate::rate_limit::retry_with_backoff;

pub use export::csv_export_url;

/// Downloads the sheet export and parses it into catalog entries.
///
/// Non-2xx responses are typed errors rather than bodies to parse, so an
/// HTML error page can never be mistaken for an (empty) catalog.
///
/// Transient errors (network failures, 429, 5xx) are retried with
/// exponential backoff up to `max_retries` additional attempts.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl SheetClient {
    /// Creates a `SheetClient` with a per-request timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a `SheetClient` from the `STOREFRONT_FETCH_*` settings.
    ///
    /// # Errors
    ///
    /// See [`SheetClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, IngestError> {
        Self::new(
            config.fetch_timeout_secs,
            &config.user_agent,
            config.fetch_max_retries,
            config.fetch_backoff_base_secs,
        )
    }

    /// Fetches the export body as text.
    ///
    /// # Errors
    ///
    /// - [`IngestError::InvalidSheetUrl`] if `sheet_url` is not an absolute URL.
    /// - [`IngestError::UnexpectedStatus`] for any non-2xx status (429 and 5xx
    ///   retried first).
    /// - [`IngestError::Http`] on network, timeout or body decode failure after
    ///   all retries.
    pub async fn fetch_text(&self, sheet_url: &str) -> Result<String, IngestError> {
        let url = csv_export_url(sheet_url)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
                    .header(reqwest::header::CACHE_CONTROL, "no-cache")
                    .send()
                    .await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(IngestError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }

    /// Fetches and parses the sheet.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_text`] errors, and returns
    /// [`IngestError::EmptyCatalog`] when the body yields no valid rows.
    pub async fn fetch_catalog(&self, sheet_url: &str) -> Result<ParsedCatalog, IngestError> {
        let body = self.fetch_text(sheet_url).await?;
        let parsed = parse_catalog(&body);

        if parsed.entries.is_empty() {
            return Err(IngestError::EmptyCatalog {
                url: sheet_url.to_owned(),
                skipped_rows: parsed.skipped_rows,
            });
        }

        tracing::debug!(
            entries = parsed.entries.len(),
            skipped_rows = parsed.skipped_rows,
            bytes = body.len(),
            "parsed catalog sheet"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
