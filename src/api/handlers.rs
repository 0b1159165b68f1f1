//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, SampleRecord, SeriesQuery, StateResponse};
use crate::sim::kpi::DailyTotal;

/// Returns the system configuration and yield summary.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        config: state.config.clone(),
        summary: state.summary.clone(),
    })
}

/// Returns samples, optionally filtered by index range.
///
/// `GET /series` → 200 + `Vec<SampleRecord>` JSON
/// `GET /series?from=N&to=M` → filtered range (inclusive)
/// `GET /series?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let records: Vec<SampleRecord> = state
        .series
        .iter()
        .enumerate()
        .skip(from)
        .take_while(|(i, _)| *i <= to)
        .map(|(i, s)| SampleRecord::new(i, s))
        .collect();

    Ok(Json(records))
}

/// Returns the energy per calendar day.
///
/// `GET /daily` → 200 + `Vec<DailyTotal>` JSON
pub async fn get_daily(State(state): State<Arc<AppState>>) -> Json<Vec<DailyTotal>> {
    Json(state.daily.clone())
}
