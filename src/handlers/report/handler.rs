//! Report handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, parser::LoadSummary, state::AppState};

use super::{
    request::OrderQuery,
    response::{DriverInfoResponse, DriversListResponse, ReportResponse},
};

/// Ranked lap time report
pub async fn ranked_report(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Json<ReportResponse> {
    let order = query.sort_order();
    let report = state.report().await;

    Json(ReportResponse {
        order,
        drivers: report.ranked_list(order),
    })
}

/// Ranked report as plain text
pub async fn text_report(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> String {
    state.report().await.text_report(query.sort_order())
}

/// All drivers in start-log order
pub async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Json<DriversListResponse> {
    let drivers = state.report().await.all_participants();

    Json(DriversListResponse {
        order: query.sort_order(),
        total: drivers.len(),
        drivers,
    })
}

/// Single driver by code; unknown codes get the placeholder body
pub async fn get_driver(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> (StatusCode, Json<DriverInfoResponse>) {
    match state.report().await.lookup(&driver_id) {
        Some(info) => (StatusCode::OK, Json(info.into())),
        None => {
            tracing::debug!(driver_id = %driver_id, "Driver not found");
            (
                StatusCode::NOT_FOUND,
                Json(DriverInfoResponse::not_found(driver_id)),
            )
        }
    }
}

/// Diagnostics of the current load
pub async fn load_summary(State(state): State<AppState>) -> Json<LoadSummary> {
    Json(state.report().await.summary().clone())
}

/// Re-read the timing files
pub async fn reload(State(state): State<AppState>) -> AppResult<Json<LoadSummary>> {
    let report = state.reload().await?;
    tracing::info!(
        dir = %state.config().data.dir.display(),
        participants = report.len(),
        "Report reloaded"
    );
    Ok(Json(report.summary().clone()))
}
