//! awards-web: HTTP adapter for the award search engine.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /search` | Filtered, paginated search |
//! | `POST /faculties` | Faculty choices, optionally for one campus |
//! | `GET /awards/{number}` | One award by its award number |
//!
//! Every response body is a `{"success": bool, "data": ...}` envelope.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use awards_core::{config::SearchConfig, Store};
use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handler state. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub search: SearchConfig,
}

impl AppState {
    pub fn new(store: Arc<Store>, search: SearchConfig) -> Self {
        Self { store, search }
    }
}

/// Response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(handlers::search_awards))
        .route("/faculties", post(handlers::faculties))
        .route("/awards/{number}", get(handlers::award_by_number))
        .with_state(state)
}

/// Serve the router on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "award search listening");
    }
    axum::serve(listener, router(state)).await
}
