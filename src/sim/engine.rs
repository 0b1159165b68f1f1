//! System yield aggregator: combines both arrays into the quarter-hourly series.

use rayon::prelude::*;

use crate::tables::astronomical;

use super::array::{ArrayDiagnostics, ArrayModel, DayAccumulator};
use super::clock::QuarterHourClock;
use super::types::{QUARTERS_PER_DAY, QuarterHourSample, SystemConfig, YieldSeries};

/// Output of a run together with its diagnostics.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub series: YieldSeries,
    /// Per-day energy of side 1 (kWh, strings included, before polarity and ceiling).
    pub side1: ArrayDiagnostics,
    /// Per-day energy of side 2.
    pub side2: ArrayDiagnostics,
    /// Samples whose unclipped value exceeded the ceiling.
    pub clipped_samples: usize,
}

struct DayOutcome {
    side1_kwh: f64,
    side2_kwh: f64,
    clipped: usize,
}

/// Simulates the configured system over its window.
///
/// Pure and deterministic: identical configurations give identical series.
pub fn simulate(config: &SystemConfig) -> YieldSeries {
    simulate_with_diagnostics(config).series
}

/// Like [`simulate`], also returning daily energy per side and the clip count.
pub fn simulate_with_diagnostics(config: &SystemConfig) -> SimulationRun {
    let window = config.window;
    let _span = tracing::info_span!(
        "simulate",
        start = %window.start,
        years = window.years,
        samples = window.total_samples()
    )
    .entered();

    let side1 = ArrayModel::from_config(&config.side1);
    let side2 = ArrayModel::from_config(&config.side2);
    let sign = config.polarity.sign();
    let ceiling = config.ceiling_kw;
    let site = &config.site;

    let mut power = vec![0.0_f64; window.total_samples()];
    let outcomes: Vec<DayOutcome> = power
        .par_chunks_mut(QUARTERS_PER_DAY)
        .enumerate()
        .map(|(offset, slots)| {
            let day = astronomical::day_record(window.table_day(offset));
            let mut acc1 = DayAccumulator::default();
            let mut acc2 = DayAccumulator::default();
            let mut clipped = 0;

            for (q, slot) in slots.iter_mut().enumerate() {
                let p1 = side1.power_kw(&day, q, site);
                let p2 = side2.power_kw(&day, q, site);
                acc1.add(p1);
                acc2.add(p2);

                let combined = (p1 + p2) * sign;
                if combined > ceiling {
                    clipped += 1;
                }
                *slot = combined.min(ceiling);
            }

            DayOutcome {
                side1_kwh: acc1.energy_kwh(),
                side2_kwh: acc2.energy_kwh(),
                clipped,
            }
        })
        .collect();

    let clock = QuarterHourClock::new(window.start_datetime(), power.len());
    let samples: Vec<QuarterHourSample> = clock
        .zip(power)
        .map(|((_, timestamp), power_kw)| QuarterHourSample {
            timestamp,
            power_kw,
        })
        .collect();

    let side1_diag = ArrayDiagnostics {
        daily_kwh: outcomes.iter().map(|o| o.side1_kwh).collect(),
    };
    let side2_diag = ArrayDiagnostics {
        daily_kwh: outcomes.iter().map(|o| o.side2_kwh).collect(),
    };
    let clipped_samples = outcomes.iter().map(|o| o.clipped).sum();

    tracing::debug!(
        side1_kwh = side1_diag.total_kwh(),
        side2_kwh = side2_diag.total_kwh(),
        clipped_samples,
        "yield per side"
    );
    tracing::info!(samples = samples.len(), "simulation complete");

    SimulationRun {
        series: YieldSeries::from_samples(samples),
        side1: side1_diag,
        side2: side2_diag,
        clipped_samples,
    }
}
