//! REST API for a finished yield simulation.
//!
//! Provides three GET endpoints:
//! - `/state` - system configuration and yield summary
//! - `/series` - quarter-hour samples with optional index range filtering
//! - `/daily` - energy per calendar day

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::sim::engine::SimulationRun;
use crate::sim::kpi::{DailyTotal, YieldSummary, daily_totals};
use crate::sim::types::{SystemConfig, YieldSeries};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the simulation run completes and wrapped in
/// `Arc`; all data is read-only, so no locks are involved.
pub struct AppState {
    /// Configuration the series was simulated from.
    pub config: SystemConfig,
    /// Aggregate yield figures.
    pub summary: YieldSummary,
    /// Quarter-hourly output.
    pub series: YieldSeries,
    /// Energy per calendar day.
    pub daily: Vec<DailyTotal>,
}

impl AppState {
    /// Builds the state from a run and the configuration it came from.
    pub fn from_run(config: SystemConfig, run: SimulationRun) -> Self {
        let summary = YieldSummary::from_run(&run);
        let daily = daily_totals(&run.series);
        Self {
            config,
            summary,
            series: run.series,
            daily,
        }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/series", get(handlers::get_series))
        .route("/daily", get(handlers::get_daily))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
