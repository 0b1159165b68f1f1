//! Quarter-hourly clear-sky yield simulator for two-array PV installations.

#[cfg(feature = "api")]
pub mod api;
/// TOML scenario configuration and presets.
pub mod config;
pub mod io;
/// Simulation engine, array model, and reporting.
pub mod sim;
/// Read-only astronomical and orientation calibration tables.
pub mod tables;
