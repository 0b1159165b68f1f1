//! CSV export for the yield series and daily totals.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::kpi::DailyTotal;
use crate::sim::types::YieldSeries;

const SERIES_HEADER: [&str; 2] = ["timestamp", "power_kw"];
const DAILY_HEADER: [&str; 2] = ["date", "energy_kwh"];

/// Timestamp layout of the series export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Exports the quarter-hourly series to a CSV file at the given path.
///
/// Writes a `timestamp,power_kw` header followed by one row per sample.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_series_csv(series: &YieldSeries, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_series_csv(series, io::BufWriter::new(file))
}

/// Writes the series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_series_csv(series: &YieldSeries, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SERIES_HEADER)?;
    for s in series {
        wtr.write_record(&[
            s.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            format!("{:.6}", s.power_kw),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports daily energy totals to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_daily_csv(days: &[DailyTotal], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_daily_csv(days, io::BufWriter::new(file))
}

/// Writes daily totals as CSV (`date,energy_kwh`) to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_daily_csv(days: &[DailyTotal], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(DAILY_HEADER)?;
    for d in days {
        wtr.write_record(&[
            d.date.format("%Y-%m-%d").to_string(),
            format!("{:.6}", d.energy_kwh),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::sim::types::QuarterHourSample;

    fn series(n: usize) -> YieldSeries {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        YieldSeries::from_samples(
            (0..n)
                .map(|i| QuarterHourSample {
                    timestamp: start + Duration::minutes(15 * i as i64),
                    power_kw: i as f64 * 0.001,
                })
                .collect(),
        )
    }

    fn render(series: &YieldSeries) -> String {
        let mut buf = Vec::new();
        write_series_csv(series, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn series_header_and_rows() {
        let output = render(&series(3));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "timestamp,power_kw",
                "2023-06-01 00:00,0.000000",
                "2023-06-01 00:15,0.001000",
                "2023-06-01 00:30,0.002000",
            ]
        );
    }

    #[test]
    fn row_count_matches_sample_count() {
        let output = render(&series(96));
        // 1 header + 96 data rows
        assert_eq!(output.lines().count(), 97);
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(render(&series(10)), render(&series(10)));
    }

    #[test]
    fn daily_csv_layout() {
        let days = vec![
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
                energy_kwh: 1.25,
            },
            DailyTotal {
                date: NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
                energy_kwh: 0.5,
            },
        ];
        let mut buf = Vec::new();
        write_daily_csv(&days, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "date,energy_kwh\n2023-06-01,1.250000\n2023-06-02,0.500000\n"
        );
    }
}
