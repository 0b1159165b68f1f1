//! Per-array power from usable irradiance, plus the daily energy tally.

use serde::Serialize;

use crate::tables::orientation::OrientationCorrection;

use super::irradiance::irradiance_for_day;
use super::types::{ArrayConfig, DayRecord, Site};

/// Exponent of the empirical panel response to irradiance.
pub const IRRADIANCE_EXPONENT: f64 = 1.8;

const RESPONSE_NORMALIZATION: f64 = 1020.0;
const RESPONSE_DIVISOR: f64 = 26.0;
const MODULE_EFFICIENCY: f64 = 0.95;
const NAMEPLATE_DIVISOR: f64 = 4000.0;

/// Internal power units per kW.
pub const UNITS_PER_KW: f64 = 1000.0;

/// Hours covered by one sample.
pub const QUARTER_HOUR_H: f64 = 0.25;

/// Power contribution of one string, in internal units, for a usable
/// intensity (W/m²) as returned by the irradiance calculator.
///
/// Zero intensity or zero nameplate power give exactly zero. The result is
/// linear in `string_wp`.
pub fn array_power(usable_intensity: f64, string_wp: f64, irradiance_factor: f64) -> f64 {
    if usable_intensity == 0.0 {
        return 0.0;
    }
    let response = usable_intensity.powf(IRRADIANCE_EXPONENT);
    let normalized = response / RESPONSE_NORMALIZATION / RESPONSE_DIVISOR;
    let factor = normalized * irradiance_factor * MODULE_EFFICIENCY;
    string_wp * factor / NAMEPLATE_DIVISOR
}

/// An [`ArrayConfig`] with its orientation correction resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayModel {
    pub string_wp: f64,
    pub strings: f64,
    pub correction: OrientationCorrection,
}

impl ArrayModel {
    pub fn from_config(config: &ArrayConfig) -> Self {
        let correction = config.correction();
        if config.uses_neutral_fallback() {
            tracing::warn!(
                orientation = ?config.orientation,
                "unrecognized orientation, using neutral correction"
            );
        }
        Self {
            string_wp: config.string_wp(),
            strings: f64::from(config.strings),
            correction,
        }
    }

    /// Power of one string (kW) for one quarter-hour of a tabulated day.
    pub fn string_kw(&self, day: &DayRecord, quarter_index: usize, site: &Site) -> f64 {
        let intensity =
            irradiance_for_day(day, quarter_index, site, self.correction.time_shift_hours);
        array_power(intensity, self.string_wp, self.correction.irradiance_factor) / UNITS_PER_KW
    }

    /// Power of the whole array (kW): one string times the string count.
    pub fn power_kw(&self, day: &DayRecord, quarter_index: usize, site: &Site) -> f64 {
        self.string_kw(day, quarter_index, site) * self.strings
    }
}

/// Running energy sum for one array over one day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayAccumulator {
    sum_kw: f64,
}

impl DayAccumulator {
    pub fn add(&mut self, power_kw: f64) {
        self.sum_kw += power_kw;
    }

    /// Energy of the day so far (kWh).
    pub fn energy_kwh(&self) -> f64 {
        self.sum_kw * QUARTER_HOUR_H
    }
}

/// Daily energy per array, before polarity and ceiling, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArrayDiagnostics {
    /// Energy per simulated day (kWh), in window order.
    pub daily_kwh: Vec<f64>,
}

impl ArrayDiagnostics {
    pub fn total_kwh(&self) -> f64 {
        self.daily_kwh.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use approx::assert_relative_eq;

    use super::*;
    use crate::tables::astronomical;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Build a model under a local subscriber and return the emitted log text.
    fn logs_while_building(config: &ArrayConfig) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || ArrayModel::from_config(config));
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn site() -> Site {
        Site::new(52.13, 6.54, "Europe/Amsterdam", 0.0)
    }

    #[test]
    fn zero_intensity_gives_zero() {
        assert_eq!(array_power(0.0, 450.0, 0.72), 0.0);
    }

    #[test]
    fn zero_nameplate_gives_zero() {
        assert_eq!(array_power(200.0, 0.0, 0.72), 0.0);
    }

    #[test]
    fn closed_form() {
        let i: f64 = 200.0;
        let expected = 450.0 * (i.powf(1.8) / 1020.0 / 26.0 * 0.72 * 0.95) / 4000.0;
        assert_eq!(array_power(i, 450.0, 0.72), expected);
    }

    #[test]
    fn doubling_nameplate_doubles_output_exactly() {
        for i in [80.0, 150.0, 231.7] {
            assert_eq!(array_power(i, 900.0, 0.91), 2.0 * array_power(i, 450.0, 0.91));
        }
    }

    #[test]
    fn string_count_multiplies_array_power() {
        let rec = astronomical::day_record(150);
        let config = ArrayConfig::new("south", 45.0, 400.0);
        let one = ArrayModel::from_config(&config);
        let three = ArrayModel::from_config(&config.with_strings(1, 3));
        let p1 = one.power_kw(&rec, 50, &site());
        assert!(p1 > 0.0);
        assert_eq!(three.power_kw(&rec, 50, &site()), p1 * 3.0);
    }

    #[test]
    fn modules_per_string_scale_string_power() {
        let rec = astronomical::day_record(150);
        let config = ArrayConfig::new("west", 15.0, 300.0);
        let single = ArrayModel::from_config(&config);
        let ten = ArrayModel::from_config(&config.with_strings(10, 1));
        assert_relative_eq!(
            ten.string_kw(&rec, 60, &site()),
            10.0 * single.string_kw(&rec, 60, &site()),
            max_relative = 1e-12
        );
    }

    #[test]
    fn unknown_orientation_uses_neutral_factor() {
        let model = ArrayModel::from_config(&ArrayConfig::new("skyward", 45.0, 400.0));
        assert_eq!(model.correction.irradiance_factor, 0.5);
        assert_eq!(model.correction.time_shift_hours, 0.0);
    }

    #[test]
    fn unknown_tilted_orientation_logs_a_warning() {
        let logs = logs_while_building(&ArrayConfig::new("skyward", 45.0, 400.0));
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("unrecognized orientation"), "{logs}");
    }

    #[test]
    fn flat_or_known_orientation_stays_quiet() {
        assert_eq!(logs_while_building(&ArrayConfig::new("skyward", 0.0, 400.0)), "");
        assert_eq!(logs_while_building(&ArrayConfig::new("east", 45.0, 400.0)), "");
    }

    #[test]
    fn accumulator_converts_quarter_hours_to_kwh() {
        let mut acc = DayAccumulator::default();
        for _ in 0..4 {
            acc.add(2.0);
        }
        assert_eq!(acc.energy_kwh(), 2.0);
    }

    #[test]
    fn diagnostics_total() {
        let d = ArrayDiagnostics {
            daily_kwh: vec![1.0, 3.5, 2.0],
        };
        assert_eq!(d.total_kwh(), 6.5);
        assert_eq!(ArrayDiagnostics::default().total_kwh(), 0.0);
    }
}
