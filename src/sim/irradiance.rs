//! Quarter-hour solar position and usable clear-sky irradiance.
//!
//! Every `(day, quarter)` pair is evaluated independently from the read-only
//! tables, so samples can be computed in any order or in parallel.

use crate::tables::astronomical;

use super::types::{DayRecord, QUARTERS_PER_DAY, Site};

/// Solar constant (W/m²).
pub const SOLAR_CONSTANT_W_M2: f64 = 1361.0;

/// Intensities at or below this value are treated as unusable grazing light.
pub const MIN_USABLE_INTENSITY_W_M2: f64 = 75.0;

/// Degrees of hour angle per hour of time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Sun geometry for one quarter-hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub hour_angle_deg: f64,
    pub zenith_deg: f64,
}

impl SolarPosition {
    /// True when the sun is at or below the horizon.
    pub fn is_night(&self) -> bool {
        self.zenith_deg >= 90.0
    }
}

/// Clock hour at the start of quarter-hour slot `quarter_index` (0.00 .. 23.75).
pub fn quarter_hour(quarter_index: usize) -> f64 {
    debug_assert!(quarter_index < QUARTERS_PER_DAY);
    quarter_index as f64 * 0.25
}

/// Hour angle in degrees for clock hour `q`.
///
/// The `q - 1` offset and the `- 12` term put the zero of the hour angle at
/// local solar noon for the tables' reference clock.
pub fn hour_angle(q: f64, time_shift_hours: f64, longitude: f64, equation_of_time_min: f64) -> f64 {
    DEGREES_PER_HOUR
        * ((q - 1.0 + time_shift_hours) + longitude / 15.0 + equation_of_time_min / 60.0 - 12.0)
}

/// Solar zenith angle in degrees.
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let ha = hour_angle.to_radians();
    let cos_z = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();
    cos_z.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Sun position for one quarter-hour of a tabulated day.
pub fn solar_position(
    day: &DayRecord,
    quarter_index: usize,
    site: &Site,
    time_shift_hours: f64,
) -> SolarPosition {
    let ha = hour_angle(
        quarter_hour(quarter_index),
        time_shift_hours,
        site.longitude,
        day.equation_of_time_min,
    );
    SolarPosition {
        hour_angle_deg: ha,
        zenith_deg: zenith_angle(site.latitude, day.declination_deg, ha),
    }
}

/// Usable clear-sky intensity (W/m²) for one quarter-hour of a tabulated day.
///
/// Returns exactly `0.0` at night and for intensities at or below
/// [`MIN_USABLE_INTENSITY_W_M2`].
pub fn irradiance_for_day(
    day: &DayRecord,
    quarter_index: usize,
    site: &Site,
    time_shift_hours: f64,
) -> f64 {
    let pos = solar_position(day, quarter_index, site, time_shift_hours);
    if pos.is_night() {
        return 0.0;
    }
    let intensity = SOLAR_CONSTANT_W_M2 * pos.zenith_deg.to_radians().cos() * day.transmittance;
    if intensity > MIN_USABLE_INTENSITY_W_M2 {
        intensity
    } else {
        0.0
    }
}

/// Usable clear-sky intensity (W/m²) for a day of the reference year.
///
/// `day_of_year` wraps modulo 365.
pub fn irradiance(
    day_of_year: usize,
    quarter_index: usize,
    site: &Site,
    time_shift_hours: f64,
) -> f64 {
    let day = astronomical::day_record(day_of_year);
    irradiance_for_day(&day, quarter_index, site, time_shift_hours)
}
