// HTTP request handlers
use crate::application::power_service::PowerQueryError;
use crate::domain::error::PipelineError;
use crate::domain::station::Station;
use crate::domain::time_range::{QuickRange, TimeRange};
use crate::infrastructure::http_response::{accepts_brotli, error_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerQuery {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub range: Option<QuickRange>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StationListBody {
    stations: Vec<Station>,
    total_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    loading: bool,
    in_flight: usize,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Whether any power query is currently loading
pub async fn status(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let loading = state.power_service.loading();
    let body = StatusBody {
        loading: loading.is_loading(),
        in_flight: loading.in_flight(),
    };
    respond(json_response(StatusCode::OK, &body, accepts_brotli(&headers)).await)
}

/// List all stations
pub async fn list_stations(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);

    let stations = match state.station_service.list_stations().await {
        Ok(stations) => stations,
        Err(e) => {
            tracing::error!("Error fetching stations: {}", e);
            // Return empty list on error
            Vec::new()
        }
    };

    let body = StationListBody {
        total_count: stations.len(),
        stations,
    };
    respond(json_response(StatusCode::OK, &body, compress).await)
}

/// Chart data and statistics for one station over a time range
pub async fn station_power(
    Path(id): Path<String>,
    Query(query): Query<PowerQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let (start, end) = match resolve_range(&query) {
        Some(bounds) => bounds,
        None => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "startTime and endTime, or range, are required",
            )
            .await;
        }
    };

    match state.power_service.query_power_data(&id, start, end).await {
        Ok(result) => respond(json_response(StatusCode::OK, &result, compress).await),
        Err(e) => {
            let status = error_status(&e);
            if status.is_server_error() {
                tracing::error!("Power query for {} failed: {}", id, e);
            } else {
                tracing::warn!("Power query for {} rejected: {}", id, e);
            }
            error_response(status, &e.to_string()).await
        }
    }
}

/// Explicit bounds win; a quick range fills in whichever bound is missing.
fn resolve_range(query: &PowerQuery) -> Option<(i64, i64)> {
    let quick = query
        .range
        .map(|kind| TimeRange::quick(kind, chrono::Local::now()));

    let start = query.start_time.or(quick.map(|r| r.start))?;
    let end = query.end_time.or(quick.map(|r| r.end))?;
    Some((start, end))
}

fn error_status(error: &PowerQueryError) -> StatusCode {
    match error {
        PowerQueryError::Pipeline(PipelineError::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
        PowerQueryError::Pipeline(PipelineError::MalformedInput { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PowerQueryError::Pipeline(PipelineError::InvalidConfig(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        PowerQueryError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

fn respond(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
