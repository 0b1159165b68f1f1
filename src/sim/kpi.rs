//! Post-hoc yield summaries computed from a finished run.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::array::QUARTER_HOUR_H;
use super::engine::SimulationRun;
use super::types::YieldSeries;

/// Aggregate figures describing a complete simulation run.
///
/// Computed post-hoc from the output series so the reported numbers always
/// agree with the exported samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldSummary {
    /// Energy of the output series (kWh, after polarity and ceiling).
    pub total_kwh: f64,
    /// Side 1 energy before polarity and ceiling (kWh).
    pub side1_kwh: f64,
    /// Side 2 energy before polarity and ceiling (kWh).
    pub side2_kwh: f64,
    /// Largest sample magnitude (kW).
    pub peak_kw: f64,
    /// Timestamp of the first sample reaching `peak_kw`.
    pub peak_at: Option<chrono::NaiveDateTime>,
    /// Samples limited by the ceiling.
    pub clipped_samples: usize,
    /// Samples with non-zero output.
    pub productive_quarters: usize,
    pub samples: usize,
    /// Calendar day with the largest energy magnitude, earliest on ties.
    pub best_day: Option<DailyTotal>,
}

impl YieldSummary {
    /// Summary of a run, including the per-side diagnostics.
    pub fn from_run(run: &SimulationRun) -> Self {
        Self {
            side1_kwh: run.side1.total_kwh(),
            side2_kwh: run.side2.total_kwh(),
            clipped_samples: run.clipped_samples,
            ..Self::from_series(&run.series)
        }
    }

    /// Summary of a bare series. Per-side figures and the clip count are zero.
    pub fn from_series(series: &YieldSeries) -> Self {
        let mut sum_kw = 0.0;
        let mut peak_kw = 0.0_f64;
        let mut peak_at = None;
        let mut productive = 0;

        for s in series {
            sum_kw += s.power_kw;
            if s.power_kw != 0.0 {
                productive += 1;
            }
            if s.power_kw.abs() > peak_kw {
                peak_kw = s.power_kw.abs();
                peak_at = Some(s.timestamp);
            }
        }

        Self {
            total_kwh: sum_kw * QUARTER_HOUR_H,
            side1_kwh: 0.0,
            side2_kwh: 0.0,
            peak_kw,
            peak_at,
            clipped_samples: 0,
            productive_quarters: productive,
            samples: series.len(),
            best_day: best_day(&daily_totals(series)),
        }
    }
}

impl fmt::Display for YieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Yield Report ---")?;
        writeln!(f, "Total energy:          {:.6} kWh", self.total_kwh)?;
        writeln!(f, "Side 1 energy:         {:.6} kWh", self.side1_kwh)?;
        writeln!(f, "Side 2 energy:         {:.6} kWh", self.side2_kwh)?;
        match self.peak_at {
            Some(at) => writeln!(
                f,
                "Peak output:           {:.6} kW at {}",
                self.peak_kw,
                at.format("%Y-%m-%d %H:%M")
            )?,
            None => writeln!(f, "Peak output:           {:.6} kW", self.peak_kw)?,
        }
        if let Some(day) = &self.best_day {
            writeln!(
                f,
                "Best day:              {} ({:.6} kWh)",
                day.date, day.energy_kwh
            )?;
        }
        writeln!(
            f,
            "Productive quarters:   {} of {}",
            self.productive_quarters, self.samples
        )?;
        write!(f, "Clipped samples:       {}", self.clipped_samples)
    }
}

/// Energy of one calendar day of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub energy_kwh: f64,
}

/// Groups the series by calendar date and sums each day's energy (kWh).
pub fn daily_totals(series: &YieldSeries) -> Vec<DailyTotal> {
    let mut days: Vec<DailyTotal> = Vec::new();
    for s in series {
        let date = s.timestamp.date();
        let energy = s.power_kw * QUARTER_HOUR_H;
        match days.last_mut() {
            Some(last) if last.date == date => last.energy_kwh += energy,
            _ => days.push(DailyTotal {
                date,
                energy_kwh: energy,
            }),
        }
    }
    days
}

fn best_day(days: &[DailyTotal]) -> Option<DailyTotal> {
    days.iter().copied().fold(None, |best: Option<DailyTotal>, day| match best {
        Some(b) if b.energy_kwh.abs() >= day.energy_kwh.abs() => Some(b),
        _ => Some(day),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDateTime};

    use super::*;
    use crate::sim::types::QuarterHourSample;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn series(values: &[f64]) -> YieldSeries {
        YieldSeries::from_samples(
            values
                .iter()
                .enumerate()
                .map(|(i, &power_kw)| QuarterHourSample {
                    timestamp: start() + Duration::minutes(15 * i as i64),
                    power_kw,
                })
                .collect(),
        )
    }

    #[test]
    fn total_energy_is_quarter_of_power_sum() {
        let summary = YieldSummary::from_series(&series(&[0.0, 1.0, 2.0, 1.0]));
        assert_relative_eq!(summary.total_kwh, 1.0);
        assert_eq!(summary.productive_quarters, 3);
        assert_eq!(summary.samples, 4);
    }

    #[test]
    fn peak_uses_magnitude_and_first_occurrence() {
        let summary = YieldSummary::from_series(&series(&[0.0, -3.0, -1.0, -3.0]));
        assert_eq!(summary.peak_kw, 3.0);
        assert_eq!(summary.peak_at, Some(start() + Duration::minutes(15)));
        assert_relative_eq!(summary.total_kwh, -1.75);
    }

    #[test]
    fn empty_series() {
        let summary = YieldSummary::from_series(&series(&[]));
        assert_eq!(summary.total_kwh, 0.0);
        assert_eq!(summary.peak_at, None);
        assert_eq!(summary.best_day, None);
        assert!(daily_totals(&series(&[])).is_empty());
    }

    #[test]
    fn daily_totals_split_at_midnight() {
        let mut values = vec![0.0; 96 * 2];
        values[48] = 4.0;
        values[96 + 50] = 2.0;
        values[96 + 51] = 4.0;
        let days = daily_totals(&series(&values));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, start().date());
        assert_relative_eq!(days[0].energy_kwh, 1.0);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());
        assert_relative_eq!(days[1].energy_kwh, 1.5);
    }

    #[test]
    fn best_day_is_the_largest_magnitude_and_earliest_on_ties() {
        let mut values = vec![0.0; 96 * 3];
        values[40] = -2.0;
        values[96 + 40] = -6.0;
        values[192 + 40] = -6.0;
        let summary = YieldSummary::from_series(&series(&values));
        let best = summary.best_day.unwrap();
        assert_eq!(best.date, NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());
        assert_eq!(best.energy_kwh, -1.5);
    }

    #[test]
    fn display_lists_every_figure() {
        let text = YieldSummary::from_series(&series(&[0.0, 2.0])).to_string();
        assert!(text.starts_with("--- Yield Report ---"));
        assert!(text.contains("Total energy:"));
        assert!(text.contains("at 2023-03-01 00:15"));
        assert!(text.contains("Best day:              2023-03-01 (0.500000 kWh)"));
        assert!(text.contains("Clipped samples:       0"));
    }
}
