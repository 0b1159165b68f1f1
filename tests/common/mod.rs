//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use pv_yield_sim::sim::types::{ArrayConfig, Polarity, SimulationWindow, Site, SystemConfig};

/// Site near Enschede (52.13 N, 6.54 E).
pub fn enschede() -> Site {
    Site::new(52.13, 6.54, "Europe/Amsterdam", 42.0)
}

/// One-year window starting 2023-01-01.
pub fn year_2023() -> SimulationWindow {
    SimulationWindow::new(date(2023, 1, 1), 1)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// East 45° / 450 Wp.
pub fn east_side() -> ArrayConfig {
    ArrayConfig::new("east", 45.0, 450.0)
}

/// West 45° / 300 Wp.
pub fn west_side() -> ArrayConfig {
    ArrayConfig::new("west", 45.0, 300.0)
}

/// The east/west reference roof, unbounded and positive.
pub fn reference_system() -> SystemConfig {
    SystemConfig {
        site: enschede(),
        window: year_2023(),
        side1: east_side(),
        side2: west_side(),
        polarity: Polarity::Positive,
        ceiling_kw: f64::INFINITY,
    }
}

/// The reference roof with side 2 switched off by zero nameplate power.
pub fn side1_only() -> SystemConfig {
    SystemConfig {
        side2: ArrayConfig::new("west", 45.0, 0.0),
        ..reference_system()
    }
}
