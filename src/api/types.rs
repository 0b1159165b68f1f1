//! API response and query types.
//!
//! Sample timestamps use the same layout as the CSV export.

use serde::{Deserialize, Serialize};

use crate::io::export::TIMESTAMP_FORMAT;
use crate::sim::kpi::YieldSummary;
use crate::sim::types::{QuarterHourSample, SystemConfig};

/// Combined state response: configuration and yield summary.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub config: SystemConfig,
    pub summary: YieldSummary,
}

/// One quarter-hour sample with its position in the series.
#[derive(Debug, Serialize)]
pub struct SampleRecord {
    /// Index in the series, starting at 0.
    pub index: usize,
    /// Start of the quarter-hour, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    pub power_kw: f64,
}

impl SampleRecord {
    pub fn new(index: usize, sample: &QuarterHourSample) -> Self {
        Self {
            index,
            timestamp: sample.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            power_kw: sample.power_kw,
        }
    }
}

/// Optional range query parameters for the series endpoint.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// First sample index (inclusive).
    pub from: Option<usize>,
    /// Last sample index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
