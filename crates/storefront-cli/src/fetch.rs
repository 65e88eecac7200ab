//! One-shot catalog refresh for inspecting what the server would publish.

use storefront_core::{AppConfig, CatalogEntry, CatalogSnapshot};
use storefront_ingest::{CatalogService, RefreshOutcome, SheetClient};

/// Runs a single refresh and prints the resulting snapshot.
///
/// Goes through the same fallback policy as the server, so a failed fetch
/// prints the default catalog with `source: defaults`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the JSON output
/// cannot be serialized.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    url_override: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let url = url_override.unwrap_or(&config.sheet_url);
    let client = SheetClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build sheet client: {e}"))?;
    let service = CatalogService::new(client, url);

    tracing::info!(%url, "fetching catalog sheet");
    let outcome = service.refresh().await;
    let snapshot = service.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
        return Ok(());
    }

    for entry in snapshot.entries() {
        println!("{}", format_entry(entry));
    }
    println!("{}", summary_line(&snapshot, &outcome));
    Ok(())
}

/// One-line summary: `[id] name | category | price | stock`.
pub(crate) fn format_entry(entry: &CatalogEntry) -> String {
    format!(
        "[{}] {} | {} | {} | estoque {}",
        entry.external_id, entry.name, entry.category, entry.price, entry.stock_count
    )
}

pub(crate) fn summary_line(snapshot: &CatalogSnapshot, outcome: &RefreshOutcome) -> String {
    match outcome {
        RefreshOutcome::Published { skipped_rows, .. } => format!(
            "{} entries from {} ({skipped_rows} rows skipped)",
            snapshot.len(),
            snapshot.source()
        ),
        RefreshOutcome::FellBack { reason, .. } => format!(
            "{} entries from {} (refresh failed: {reason})",
            snapshot.len(),
            snapshot.source()
        ),
        RefreshOutcome::AlreadyRunning => format!(
            "{} entries from {}",
            snapshot.len(),
            snapshot.source()
        ),
    }
}
