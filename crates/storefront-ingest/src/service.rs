//! The catalog refresh orchestrator.
//!
//! [`CatalogService`] is the single writer of the published
//! [`CatalogSnapshot`]. Readers get an `Arc` to a complete snapshot and never
//! see a half-built list; failed refreshes leave the published snapshot as it
//! was.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use storefront_core::{AppConfig, CatalogSnapshot, SnapshotSource};
use tokio::sync::watch;

use crate::client::SheetClient;
use crate::error::IngestError;

/// What a call to [`CatalogService::refresh`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// A new sheet snapshot was published.
    Published {
        generation: u64,
        entries: usize,
        skipped_rows: usize,
    },
    /// The refresh failed and the current snapshot was kept.
    FellBack {
        source: SnapshotSource,
        reason: String,
    },
    /// Another refresh was in flight; nothing was done.
    AlreadyRunning,
}

/// Owns the published catalog and keeps it in sync with the sheet.
#[derive(Debug)]
pub struct CatalogService {
    client: SheetClient,
    sheet_url: String,
    snapshot_tx: watch::Sender<Arc<CatalogSnapshot>>,
    in_flight: AtomicBool,
    generation: AtomicU64,
}

/// Clears the in-flight flag on drop, including when the refresh future is
/// cancelled mid-request.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CatalogService {
    /// Creates the service with the default catalog published as generation 0.
    ///
    /// No fetch happens here; callers trigger the first [`Self::refresh`].
    #[must_use]
    pub fn new(client: SheetClient, sheet_url: impl Into<String>) -> Self {
        let (snapshot_tx, _) = watch::channel(Arc::new(CatalogSnapshot::defaults(0)));
        Self {
            client,
            sheet_url: sheet_url.into(),
            snapshot_tx,
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    /// Builds the client and service from application config.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, IngestError> {
        let client = SheetClient::from_config(config)?;
        Ok(Self::new(client, config.sheet_url.clone()))
    }

    #[must_use]
    pub fn sheet_url(&self) -> &str {
        &self.sheet_url
    }

    /// The currently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot_tx.borrow())
    }

    /// `true` while a refresh is fetching or parsing.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Receiver that is notified on every publish.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<CatalogSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    /// Fetches, parses and publishes the sheet.
    ///
    /// Never fails: errors are logged and reported as
    /// [`RefreshOutcome::FellBack`], leaving the current snapshot in place
    /// (the default catalog if the sheet has never been read). Concurrent
    /// calls return [`RefreshOutcome::AlreadyRunning`] without waiting.
    pub async fn refresh(&self) -> RefreshOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("catalog refresh already in flight; skipping");
            return RefreshOutcome::AlreadyRunning;
        }
        let _guard = InFlightGuard(&self.in_flight);

        match self.client.fetch_catalog(&self.sheet_url).await {
            Ok(parsed) => {
                let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
                let entries = parsed.entries.len();
                self.snapshot_tx
                    .send_replace(Arc::new(CatalogSnapshot::from_sheet(
                        parsed.entries,
                        generation,
                    )));
                tracing::info!(
                    generation,
                    entries,
                    skipped_rows = parsed.skipped_rows,
                    "catalog refreshed from sheet"
                );
                RefreshOutcome::Published {
                    generation,
                    entries,
                    skipped_rows: parsed.skipped_rows,
                }
            }
            Err(e) => {
                // The initial snapshot is the default set, so "keep the current
                // snapshot" also covers "install defaults on first failure".
                let source = self.snapshot_tx.borrow().source();
                tracing::warn!(
                    error = %e,
                    url = %self.sheet_url,
                    %source,
                    "catalog refresh failed; keeping current snapshot"
                );
                RefreshOutcome::FellBack {
                    source,
                    reason: e.to_string(),
                }
            }
        }
    }
}
