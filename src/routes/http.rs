// Batch, threshold, export and detail handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;

use super::AppState;
use crate::error::{BatchError, Result};
use crate::models::{BatchView, DeviceDetail, ExportReport};
use crate::session;
use crate::version::{NAME, VERSION};

#[derive(Debug, Deserialize)]
pub(super) struct SubmitBatchRequest {
    /// Raw operator input: IMEIs separated by newlines or commas.
    input: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ThresholdRequest {
    threshold: u32,
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/batches: validate, look up and classify a new batch; replaces the current one.
pub(super) async fn submit_batch_handler(
    State(state): State<AppState>,
    Json(req): Json<SubmitBatchRequest>,
) -> Result<Json<BatchView>> {
    let new_session =
        session::submit_batch(state.lookup.as_ref(), &req.input, state.max_batch_size).await?;
    let view = new_session.view(&state.zones);
    *state.session.write().await = Some(new_session);
    Ok(Json(view))
}

pub(super) async fn current_batch_handler(State(state): State<AppState>) -> Result<Json<BatchView>> {
    let guard = state.session.read().await;
    let current = guard.as_ref().ok_or(BatchError::NoActiveBatch)?;
    Ok(Json(current.view(&state.zones)))
}

/// PUT /api/batch/threshold: reclassify the current batch against a new threshold.
pub(super) async fn set_threshold_handler(
    State(state): State<AppState>,
    Json(req): Json<ThresholdRequest>,
) -> Result<Json<BatchView>> {
    let mut guard = state.session.write().await;
    let current = guard.as_ref().ok_or(BatchError::NoActiveBatch)?;
    let next = current.with_threshold(req.threshold)?;
    let view = next.view(&state.zones);
    *guard = Some(next);
    Ok(Json(view))
}

pub(super) async fn export_handler(State(state): State<AppState>) -> Result<Json<ExportReport>> {
    let guard = state.session.read().await;
    let current = guard.as_ref().ok_or(BatchError::NoActiveBatch)?;
    Ok(Json(current.export(&state.zones)))
}

/// GET /api/devices/{imei}: on-demand raw payload for one device.
pub(super) async fn device_detail_handler(
    State(state): State<AppState>,
    Path(imei): Path<String>,
) -> Result<Json<DeviceDetail>> {
    let detail = session::fetch_detail(state.lookup.as_ref(), &imei).await?;
    Ok(Json(detail))
}
