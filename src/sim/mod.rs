/// Per-array power model and daily energy accumulation.
pub mod array;
/// Quarter-hour clock for timestamp generation.
pub mod clock;
pub mod engine;
/// Solar position and usable irradiance per quarter-hour.
pub mod irradiance;
pub mod kpi;
pub mod types;
