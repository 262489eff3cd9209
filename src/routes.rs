// HTTP routes

mod error;
mod http;

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::lookup_repo::DeviceLookup;
use crate::session::BatchSession;
use crate::timezone::Zones;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) lookup: Arc<dyn DeviceLookup>,
    /// Current batch; a new submission replaces it.
    pub(crate) session: Arc<RwLock<Option<BatchSession>>>,
    pub(crate) zones: Zones,
    pub(crate) max_batch_size: usize,
}

pub fn app(lookup: Arc<dyn DeviceLookup>, config: &AppConfig) -> anyhow::Result<Router> {
    let state = AppState {
        lookup,
        session: Arc::new(RwLock::new(None)),
        zones: config.zones()?,
        max_batch_size: config.lookup.max_batch_size,
    };
    Ok(Router::new()
        .route("/", get(|| async { "imei-status is running" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/batches", post(http::submit_batch_handler)) // POST /api/batches
        .route("/api/batch", get(http::current_batch_handler)) // GET /api/batch
        .route("/api/batch/threshold", put(http::set_threshold_handler)) // PUT /api/batch/threshold
        .route("/api/batch/export", get(http::export_handler)) // GET /api/batch/export
        .route("/api/devices/{imei}", get(http::device_detail_handler)) // GET /api/devices/{imei}
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state))
}
