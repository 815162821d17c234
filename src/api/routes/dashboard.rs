//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Control and chart layout
//! - GET /api/v1/dataset - Dataset summary
//! - anything else - JSON 404

use axum::{extract::State, http::Uri, response::Html, Json};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::dataset::DatasetSummary;
use crate::layout::Layout;

static INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/dataset
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset.summary())
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
