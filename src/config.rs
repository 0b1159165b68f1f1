//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::sim::types::{ArrayConfig, Orientation, Polarity, SimulationWindow, Site, SystemConfig};

/// Top-level scenario configuration parsed from TOML.
///
/// All sections have defaults matching the baseline scenario except the
/// ceiling, which is unbounded unless given. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Location of the installation.
    #[serde(default)]
    pub site: SiteConfig,
    /// Simulated window.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// First array.
    #[serde(default = "ArraySideConfig::default_side1")]
    pub side1: ArraySideConfig,
    /// Second array.
    #[serde(default = "ArraySideConfig::default_side2")]
    pub side2: ArraySideConfig,
    /// Output polarity and ceiling.
    #[serde(default)]
    pub system: SystemSection,
}

/// Location of the installation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// IANA timezone identifier.
    pub timezone: String,
    /// Altitude (m).
    pub altitude_m: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude: 52.13,
            longitude: 6.54,
            timezone: "Europe/Amsterdam".to_string(),
            altitude_m: 42.0,
        }
    }
}

/// Simulated window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// First simulated day, as `"YYYY-MM-DD"`.
    pub start_date: NaiveDate,
    /// Number of 365-day years (1 or 2).
    pub years: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            years: 1,
        }
    }
}

/// One array as written in the scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArraySideConfig {
    /// Octant name or numeric bearing (south = 0, west = 90).
    pub orientation: Orientation,
    /// Tilt from horizontal (degrees, 0-90).
    pub tilt_deg: f64,
    /// Nameplate power per panel (Wp).
    pub panel_wp: f64,
    /// Panels per string.
    #[serde(default = "one")]
    pub modules_per_string: u32,
    /// Number of strings.
    #[serde(default = "one")]
    pub strings: u32,
}

fn one() -> u32 {
    1
}

impl ArraySideConfig {
    pub fn new(orientation: impl Into<Orientation>, tilt_deg: f64, panel_wp: f64) -> Self {
        Self {
            orientation: orientation.into(),
            tilt_deg,
            panel_wp,
            modules_per_string: 1,
            strings: 1,
        }
    }

    fn default_side1() -> Self {
        Self::new("east", 45.0, 450.0)
    }

    fn default_side2() -> Self {
        Self::new("west", 45.0, 300.0)
    }

    pub fn to_array_config(&self) -> ArrayConfig {
        ArrayConfig::new(self.orientation.clone(), self.tilt_deg, self.panel_wp)
            .with_strings(self.modules_per_string, self.strings)
    }

    fn validate_into(&self, side: &str, errors: &mut Vec<ConfigError>) {
        if !(0.0..=90.0).contains(&self.tilt_deg) {
            errors.push(ConfigError::new(
                format!("{side}.tilt_deg"),
                "must be in [0, 90]",
            ));
        }
        if !self.panel_wp.is_finite() || self.panel_wp < 0.0 {
            errors.push(ConfigError::new(
                format!("{side}.panel_wp"),
                "must be finite and >= 0",
            ));
        }
        if let Orientation::Bearing(b) = self.orientation
            && !b.is_finite()
        {
            errors.push(ConfigError::new(
                format!("{side}.orientation"),
                "bearing must be finite",
            ));
        }
    }
}

/// Output polarity and ceiling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemSection {
    /// `"positive"` or `"negative"`.
    pub polarity: Polarity,
    /// Hard ceiling on output (kW). Absent means unbounded.
    pub ceiling_kw: Option<f64>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field} - {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"side1.tilt_deg"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: east/west roof near Enschede, 3 kW ceiling.
    pub fn baseline() -> Self {
        Self {
            site: SiteConfig::default(),
            simulation: SimulationConfig::default(),
            side1: ArraySideConfig::default_side1(),
            side2: ArraySideConfig::default_side2(),
            system: SystemSection {
                polarity: Polarity::Positive,
                ceiling_kw: Some(3.0),
            },
        }
    }

    /// Returns a single flat south array; side 2 is disabled.
    pub fn south_flat() -> Self {
        Self {
            side1: ArraySideConfig {
                modules_per_string: 10,
                ..ArraySideConfig::new("south", 0.0, 400.0)
            },
            side2: ArraySideConfig {
                strings: 0,
                ..ArraySideConfig::new("south", 0.0, 0.0)
            },
            system: SystemSection::default(),
            ..Self::baseline()
        }
    }

    /// Returns a multi-string east/west roof over two years from 2024, reported
    /// as negative power.
    pub fn east_west_strings() -> Self {
        Self {
            side1: ArraySideConfig {
                modules_per_string: 8,
                strings: 2,
                ..ArraySideConfig::new(Orientation::Bearing(270.0), 15.0, 410.0)
            },
            side2: ArraySideConfig {
                modules_per_string: 8,
                strings: 2,
                ..ArraySideConfig::new(Orientation::Bearing(90.0), 15.0, 410.0)
            },
            simulation: SimulationConfig {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
                years: 2,
            },
            system: SystemSection {
                polarity: Polarity::Negative,
                ceiling_kw: None,
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "south_flat", "east_west_strings"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "south_flat" => Ok(Self::south_flat()),
            "east_west_strings" => Ok(Self::east_west_strings()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new(
                "scenario",
                format!("cannot read \"{}\": {e}", path.display()),
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. Unknown orientation
    /// names are accepted; the engine falls back to a neutral correction.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let site = &self.site;
        if !(-90.0..=90.0).contains(&site.latitude) {
            errors.push(ConfigError::new("site.latitude", "must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&site.longitude) {
            errors.push(ConfigError::new("site.longitude", "must be in [-180, 180]"));
        }
        if site.timezone.parse::<chrono_tz::Tz>().is_err() {
            errors.push(ConfigError::new(
                "site.timezone",
                format!("unknown IANA timezone \"{}\"", site.timezone),
            ));
        }

        if !matches!(self.simulation.years, 1 | 2) {
            errors.push(ConfigError::new("simulation.years", "must be 1 or 2"));
        }

        self.side1.validate_into("side1", &mut errors);
        self.side2.validate_into("side2", &mut errors);

        if let Some(c) = self.system.ceiling_kw
            && (c.is_nan() || c <= 0.0)
        {
            errors.push(ConfigError::new("system.ceiling_kw", "must be > 0"));
        }

        errors
    }

    /// Builds the immutable engine input from this scenario.
    pub fn to_system_config(&self) -> SystemConfig {
        SystemConfig {
            site: Site::new(
                self.site.latitude,
                self.site.longitude,
                self.site.timezone.clone(),
                self.site.altitude_m,
            ),
            window: SimulationWindow::new(self.simulation.start_date, self.simulation.years),
            side1: self.side1.to_array_config(),
            side2: self.side2.to_array_config(),
            polarity: self.system.polarity,
            ceiling_kw: self.system.ceiling_kw.unwrap_or(f64::INFINITY),
        }
    }
}
