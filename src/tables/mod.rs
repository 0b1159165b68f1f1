//! Read-only calibration tables feeding the irradiance calculator.

/// Declination, equation of time and transmittance per day of year.
pub mod astronomical;
/// Irradiance factor and time shift per octant and tilt.
pub mod orientation;

pub use astronomical::{DAYS_IN_TABLE, day_record, declination, equation_of_time, transmittance};
pub use orientation::{Octant, OrientationCorrection, orientation_factor};
