use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::{CatalogEntry, SnapshotSource};
use storefront_ingest::RefreshOutcome;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct CatalogView {
    entries: Vec<CatalogEntry>,
    source: SnapshotSource,
    generation: u64,
    refreshed_at: DateTime<Utc>,
    /// UI shows a loading placeholder instead of the list while `true`.
    loading: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct CatalogStatus {
    loading: bool,
    source: SnapshotSource,
    generation: u64,
    entry_count: usize,
    refreshed_at: DateTime<Utc>,
    sheet_url: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ContactLink {
    external_id: String,
    name: String,
    price: String,
    url: String,
}

pub(super) async fn get_catalog(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CatalogView>> {
    let snapshot = state.catalog.snapshot();
    let view = CatalogView {
        entries: snapshot.entries().to_vec(),
        source: snapshot.source(),
        generation: snapshot.generation(),
        refreshed_at: snapshot.refreshed_at(),
        loading: state.catalog.is_loading(),
    };
    Json(ApiResponse::new(view, req_id.0))
}

pub(super) async fn get_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CatalogStatus>> {
    let snapshot = state.catalog.snapshot();
    let status = CatalogStatus {
        loading: state.catalog.is_loading(),
        source: snapshot.source(),
        generation: snapshot.generation(),
        entry_count: snapshot.len(),
        refreshed_at: snapshot.refreshed_at(),
        sheet_url: state.catalog.sheet_url().to_owned(),
    };
    Json(ApiResponse::new(status, req_id.0))
}

pub(super) async fn refresh_catalog(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<RefreshOutcome>> {
    tracing::info!(request_id = %req_id.0, "manual catalog refresh requested");
    let outcome = state.catalog.refresh().await;
    Json(ApiResponse::new(outcome, req_id.0))
}

pub(super) async fn get_contact_link(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(external_id): Path<String>,
) -> Result<Json<ApiResponse<ContactLink>>, ApiError> {
    let snapshot = state.catalog.snapshot();
    let Some(entry) = snapshot.find_by_external_id(&external_id) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no catalog entry with id \"{external_id}\""),
        ));
    };

    let link = ContactLink {
        external_id: entry.external_id.clone(),
        name: entry.name.clone(),
        price: entry.price.clone(),
        url: state.contacts.product_link(entry),
    };
    Ok(Json(ApiResponse::new(link, req_id.0)))
}
