//! Chart Routes
//!
//! One endpoint per chart. The page calls these whenever the dropdown or
//! the slider changes and replaces the chart with the returned figure.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{pie_chart, scatter_chart, PieChart, ScatterChart};

/// GET /api/v1/charts/pie
pub async fn pie(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PieParams>, QueryRejection>,
) -> ApiResult<Json<PieChart>> {
    let Query(params) = query?;
    let selection = params.selection()?;
    let chart = pie_chart(&state.dataset, &selection);

    tracing::debug!(site = %selection, slices = chart.slices.len(), "Rendered pie chart");

    Ok(Json(chart))
}

/// GET /api/v1/charts/scatter
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ScatterParams>, QueryRejection>,
) -> ApiResult<Json<ScatterChart>> {
    let Query(params) = query?;
    let selection = params.selection()?;
    let range = params.range(state.initial_range())?;
    let chart = scatter_chart(&state.dataset, &selection, range);

    tracing::debug!(
        site = %selection,
        range = %range,
        points = chart.point_count(),
        "Rendered scatter chart"
    );

    Ok(Json(chart))
}
