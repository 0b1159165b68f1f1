//! Core simulation types: site, window, array and system configuration, and
//! the quarter-hourly output series.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::tables::DAYS_IN_TABLE;
use crate::tables::orientation::{Octant, OrientationCorrection, orientation_factor};

/// Number of quarter-hour slots in one day.
pub const QUARTERS_PER_DAY: usize = 96;

/// Geographic location of the installation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// IANA timezone identifier of the local clock.
    pub timezone: String,
    /// Altitude in metres. Carried along, not used by the irradiance model.
    pub altitude_m: f64,
}

impl Site {
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
        altitude_m: f64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
            altitude_m,
        }
    }
}

/// Simulated period: whole 365-day years from a start date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pv_yield_sim::sim::types::SimulationWindow;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let window = SimulationWindow::new(start, 1);
/// assert_eq!(window.days(), 365);
/// assert_eq!(window.total_samples(), 35_040);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationWindow {
    /// First simulated day; its first sample is at 00:00.
    pub start: NaiveDate,
    /// Duration in 365-day years.
    pub years: u32,
}

impl SimulationWindow {
    pub fn new(start: NaiveDate, years: u32) -> Self {
        Self { start, years }
    }

    /// Number of simulated days.
    pub fn days(&self) -> usize {
        DAYS_IN_TABLE * self.years as usize
    }

    /// Number of quarter-hour samples in the window.
    pub fn total_samples(&self) -> usize {
        self.days() * QUARTERS_PER_DAY
    }

    /// Timestamp of the first sample.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::default())
    }

    /// Table day index of simulated day `offset`, wrapped into `0..365`.
    ///
    /// The start date's zero-based ordinal anchors the tables, so a window
    /// starting January 1st reads day 0 first.
    pub fn table_day(&self, offset: usize) -> usize {
        (self.start.ordinal0() as usize + offset) % DAYS_IN_TABLE
    }
}

/// Compass orientation of an array, as a name or a bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Orientation {
    /// Bearing in degrees: south = 0, west = 90, north = 180, east = 270.
    Bearing(f64),
    /// Octant name such as `"east"`, `"SW"` or `"zuidoost"`.
    Named(String),
}

impl Orientation {
    pub fn octant(&self) -> Option<Octant> {
        match self {
            Orientation::Bearing(b) if b.is_finite() => Some(Octant::from_bearing(*b)),
            Orientation::Bearing(_) => None,
            Orientation::Named(name) => Octant::from_name(name),
        }
    }
}

impl From<Octant> for Orientation {
    fn from(octant: Octant) -> Self {
        Orientation::Named(octant.label().to_string())
    }
}

/// One group of panels sharing a tilt and compass orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayConfig {
    pub orientation: Orientation,
    /// Tilt from horizontal in degrees.
    pub tilt_deg: f64,
    /// Nameplate power per panel (Wp).
    pub panel_wp: f64,
    /// Panels wired in series in one string.
    pub modules_per_string: u32,
    /// Number of identical strings; multiplies the array's output.
    pub strings: u32,
}

impl ArrayConfig {
    /// A single-panel, single-string array.
    pub fn new(orientation: impl Into<Orientation>, tilt_deg: f64, panel_wp: f64) -> Self {
        Self {
            orientation: orientation.into(),
            tilt_deg,
            panel_wp,
            modules_per_string: 1,
            strings: 1,
        }
    }

    /// An array contributing nothing.
    pub fn disabled() -> Self {
        Self {
            strings: 0,
            ..Self::new(Octant::South, 0.0, 0.0)
        }
    }

    pub fn with_strings(mut self, modules_per_string: u32, strings: u32) -> Self {
        self.modules_per_string = modules_per_string;
        self.strings = strings;
        self
    }

    /// Nameplate power of one string (Wp).
    pub fn string_wp(&self) -> f64 {
        self.panel_wp * f64::from(self.modules_per_string)
    }

    /// Orientation correction for this array's octant and tilt.
    pub fn correction(&self) -> OrientationCorrection {
        orientation_factor(self.orientation.octant(), self.tilt_deg)
    }

    /// True when the orientation is unrecognized and the tilt makes it matter.
    pub fn uses_neutral_fallback(&self) -> bool {
        self.tilt_deg != 0.0 && self.orientation.octant().is_none()
    }
}

impl From<&str> for Orientation {
    fn from(name: &str) -> Self {
        Orientation::Named(name.to_string())
    }
}

impl From<f64> for Orientation {
    fn from(bearing: f64) -> Self {
        Orientation::Bearing(bearing)
    }
}

/// Whether yield is reported as a positive or negative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }
}

/// Complete, immutable input of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemConfig {
    pub site: Site,
    pub window: SimulationWindow,
    pub side1: ArrayConfig,
    pub side2: ArrayConfig,
    pub polarity: Polarity,
    /// Hard ceiling on every output sample (kW). `f64::INFINITY` disables it.
    pub ceiling_kw: f64,
}

/// Table values for one day of the reference year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
    pub transmittance: f64,
}

/// One point of the output series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuarterHourSample {
    pub timestamp: NaiveDateTime,
    pub power_kw: f64,
}

/// Ordered quarter-hourly output of a run.
///
/// Timestamps are strictly increasing in 15-minute steps with no gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldSeries {
    samples: Vec<QuarterHourSample>,
}

impl YieldSeries {
    pub(crate) fn from_samples(samples: Vec<QuarterHourSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[QuarterHourSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuarterHourSample> {
        self.samples.iter()
    }

    pub fn get(&self, index: usize) -> Option<&QuarterHourSample> {
        self.samples.get(index)
    }

    /// Power values in timestamp order.
    pub fn power_kw(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.power_kw)
    }
}

impl<'a> IntoIterator for &'a YieldSeries {
    type Item = &'a QuarterHourSample;
    type IntoIter = std::slice::Iter<'a, QuarterHourSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
    }

    #[test]
    fn window_counts_days_and_samples() {
        let w = SimulationWindow::new(jan_first(2023), 2);
        assert_eq!(w.days(), 730);
        assert_eq!(w.total_samples(), 70_080);
    }

    #[test]
    fn table_day_starts_at_start_ordinal_and_wraps() {
        let w = SimulationWindow::new(jan_first(2023), 2);
        assert_eq!(w.table_day(0), 0);
        assert_eq!(w.table_day(364), 364);
        assert_eq!(w.table_day(365), 0);

        let july = SimulationWindow::new(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(), 1);
        assert_eq!(july.table_day(0), 181);
        assert_eq!(july.table_day(184), 0);
    }

    #[test]
    fn orientation_resolves_names_and_bearings() {
        assert_eq!(Orientation::from("oost").octant(), Some(Octant::East));
        assert_eq!(Orientation::Bearing(90.0).octant(), Some(Octant::West));
        assert_eq!(Orientation::Bearing(f64::NAN).octant(), None);
        assert_eq!(Orientation::from("sideways").octant(), None);
    }

    #[test]
    fn string_wp_scales_with_modules() {
        let a = ArrayConfig::new("south", 45.0, 400.0).with_strings(10, 2);
        assert_eq!(a.string_wp(), 4000.0);
        assert_eq!(a.strings, 2);
    }

    #[test]
    fn neutral_fallback_only_for_unknown_tilted_arrays() {
        assert!(ArrayConfig::new("skyward", 45.0, 400.0).uses_neutral_fallback());
        let no_bearing = ArrayConfig::new(Orientation::Bearing(f64::NAN), 10.0, 400.0);
        assert!(no_bearing.uses_neutral_fallback());
        assert!(!ArrayConfig::new("skyward", 0.0, 400.0).uses_neutral_fallback());
        assert!(!ArrayConfig::new("east", 45.0, 400.0).uses_neutral_fallback());
    }

    #[test]
    fn disabled_array_has_no_strings() {
        let a = ArrayConfig::disabled();
        assert_eq!(a.strings, 0);
        assert_eq!(a.string_wp(), 0.0);
    }

    #[test]
    fn polarity_sign() {
        assert_eq!(Polarity::Positive.sign(), 1.0);
        assert_eq!(Polarity::Negative.sign(), -1.0);
        assert_eq!(Polarity::default(), Polarity::Positive);
    }
}
