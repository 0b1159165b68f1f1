//! Empirical irradiance factor and time shift per compass octant and tilt.

use std::fmt;

use serde::Serialize;

/// One of the eight compass octants a fixed array can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Octant {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Octant {
    /// Octants ordered by increasing bearing, starting at south (0°).
    const BY_BEARING: [Octant; 8] = [
        Octant::South,
        Octant::SouthWest,
        Octant::West,
        Octant::NorthWest,
        Octant::North,
        Octant::NorthEast,
        Octant::East,
        Octant::SouthEast,
    ];

    /// Parses an octant name, case-insensitive.
    ///
    /// Accepts English names and abbreviations (`"east"`, `"south-east"`,
    /// `"se"`) as well as the Dutch idioms used by the dashboard inputs
    /// (`"oost"`, `"zuidoost"`, ...). Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let octant = match key.as_str() {
            "n" | "north" | "noord" => Octant::North,
            "ne" | "northeast" | "noordoost" => Octant::NorthEast,
            "e" | "east" | "oost" => Octant::East,
            "se" | "southeast" | "zuidoost" => Octant::SouthEast,
            "s" | "south" | "zuid" => Octant::South,
            "sw" | "southwest" | "zuidwest" => Octant::SouthWest,
            "w" | "west" => Octant::West,
            "nw" | "northwest" | "noordwest" => Octant::NorthWest,
            _ => return None,
        };
        Some(octant)
    }

    /// Maps a bearing to the nearest octant.
    ///
    /// Bearings follow the dashboard convention: south = 0°, west = 90°,
    /// north = 180°, east = 270°. Any finite value is wrapped into
    /// `[0, 360)`; a bearing exactly between two octants resolves to the
    /// one with the larger bearing.
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let wrapped = bearing_deg.rem_euclid(360.0);
        let idx = ((wrapped + 22.5) / 45.0).floor() as usize % 8;
        Self::BY_BEARING[idx]
    }

    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Octant::North => "N",
            Octant::NorthEast => "NE",
            Octant::East => "E",
            Octant::SouthEast => "SE",
            Octant::South => "S",
            Octant::SouthWest => "SW",
            Octant::West => "W",
            Octant::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Irradiance factor and time shift applied to one array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientationCorrection {
    /// Fraction of the clear-sky intensity the array converts (0..1).
    pub irradiance_factor: f64,
    /// Shift of the array's light curve, in hours (negative = earlier).
    pub time_shift_hours: f64,
}

impl OrientationCorrection {
    const fn new(irradiance_factor: f64, time_shift_hours: f64) -> Self {
        Self {
            irradiance_factor,
            time_shift_hours,
        }
    }
}

/// Correction for a horizontal array, identical for every octant.
pub const FLAT: OrientationCorrection = OrientationCorrection::new(0.8, 0.0);

/// Correction used when the orientation cannot be resolved to an octant.
pub const NEUTRAL: OrientationCorrection = OrientationCorrection::new(0.5, 0.0);

/// Tilt angles with a tabulated correction (besides the flat case).
pub const TABULATED_TILTS: [f64; 3] = [15.0, 45.0, 90.0];

struct OctantRow {
    /// Corrections at 15°, 45° and 90° tilt.
    tilted: [OrientationCorrection; 3],
    /// Fallback for any other non-zero tilt.
    default: OrientationCorrection,
}

const fn row(tilted: [(f64, f64); 3], default: (f64, f64)) -> OctantRow {
    OctantRow {
        tilted: [
            OrientationCorrection::new(tilted[0].0, tilted[0].1),
            OrientationCorrection::new(tilted[1].0, tilted[1].1),
            OrientationCorrection::new(tilted[2].0, tilted[2].1),
        ],
        default: OrientationCorrection::new(default.0, default.1),
    }
}

// Calibration data. The diagonal octants carry large default shifts; they
// are kept as measured.
#[rustfmt::skip]
const EAST: OctantRow = row([(0.79, -0.30), (0.72, -0.45), (0.46, -0.60)], (0.46, -0.35));
#[rustfmt::skip]
const WEST: OctantRow = row([(0.79, 0.30), (0.71, 0.45), (0.45, 0.60)], (0.45, 0.35));
#[rustfmt::skip]
const SOUTH: OctantRow = row([(0.88, 0.0), (0.91, 0.0), (0.64, 0.0)], (0.64, 0.0));
#[rustfmt::skip]
const NORTH: OctantRow = row([(0.69, 0.0), (0.44, 0.0), (0.18, 0.0)], (0.18, 0.0));
#[rustfmt::skip]
const SOUTH_EAST: OctantRow = row([(0.86, -0.15), (0.86, -0.25), (0.6, -0.35)], (0.6, -25.0));
#[rustfmt::skip]
const SOUTH_WEST: OctantRow = row([(0.86, 0.15), (0.86, 0.25), (0.59, 0.35)], (0.59, 25.0));
#[rustfmt::skip]
const NORTH_EAST: OctantRow = row([(0.72, -0.15), (0.54, -0.25), (0.28, -0.35)], (0.28, -70.0));
#[rustfmt::skip]
const NORTH_WEST: OctantRow = row([(0.72, 0.15), (0.54, 0.25), (0.27, 0.35)], (0.27, 70.0));

fn row_for(octant: Octant) -> &'static OctantRow {
    match octant {
        Octant::North => &NORTH,
        Octant::NorthEast => &NORTH_EAST,
        Octant::East => &EAST,
        Octant::SouthEast => &SOUTH_EAST,
        Octant::South => &SOUTH,
        Octant::SouthWest => &SOUTH_WEST,
        Octant::West => &WEST,
        Octant::NorthWest => &NORTH_WEST,
    }
}

/// Looks up the correction for an octant and tilt.
///
/// A tilt of exactly 0° returns [`FLAT`] whatever the octant, including an
/// unresolved one. Tilts of 15°, 45° and 90° use their tabulated entry; any
/// other tilt gets the octant's default pair. An unresolved octant (`None`)
/// with a non-zero tilt gets [`NEUTRAL`]. The lookup never fails.
pub fn orientation_factor(octant: Option<Octant>, tilt_deg: f64) -> OrientationCorrection {
    if tilt_deg == 0.0 {
        return FLAT;
    }
    let Some(octant) = octant else {
        return NEUTRAL;
    };
    let row = row_for(octant);
    TABULATED_TILTS
        .iter()
        .position(|&t| t == tilt_deg)
        .map_or(row.default, |idx| row.tilted[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Octant::East, 15.0, 0.79, -0.30)]
    #[case(Octant::East, 45.0, 0.72, -0.45)]
    #[case(Octant::West, 45.0, 0.71, 0.45)]
    #[case(Octant::West, 90.0, 0.45, 0.60)]
    #[case(Octant::South, 45.0, 0.91, 0.0)]
    #[case(Octant::North, 90.0, 0.18, 0.0)]
    #[case(Octant::SouthEast, 45.0, 0.86, -0.25)]
    #[case(Octant::NorthWest, 15.0, 0.72, 0.15)]
    fn tabulated_entries(
        #[case] octant: Octant,
        #[case] tilt: f64,
        #[case] factor: f64,
        #[case] shift: f64,
    ) {
        let c = orientation_factor(Some(octant), tilt);
        assert_eq!(c.irradiance_factor, factor);
        assert_eq!(c.time_shift_hours, shift);
    }

    #[rstest]
    #[case(Octant::East, 0.46, -0.35)]
    #[case(Octant::South, 0.64, 0.0)]
    #[case(Octant::SouthEast, 0.6, -25.0)]
    #[case(Octant::SouthWest, 0.59, 25.0)]
    #[case(Octant::NorthEast, 0.28, -70.0)]
    #[case(Octant::NorthWest, 0.27, 70.0)]
    fn untabulated_tilt_uses_octant_default(
        #[case] octant: Octant,
        #[case] factor: f64,
        #[case] shift: f64,
    ) {
        for tilt in [10.0, 30.0, 44.9, 60.0] {
            let c = orientation_factor(Some(octant), tilt);
            assert_eq!(c.irradiance_factor, factor, "tilt {tilt}");
            assert_eq!(c.time_shift_hours, shift, "tilt {tilt}");
        }
    }

    #[test]
    fn flat_tilt_ignores_octant() {
        for octant in Octant::BY_BEARING {
            assert_eq!(orientation_factor(Some(octant), 0.0), FLAT);
        }
        assert_eq!(orientation_factor(None, 0.0), FLAT);
    }

    #[test]
    fn unresolved_octant_is_neutral() {
        let c = orientation_factor(None, 45.0);
        assert_eq!(c.irradiance_factor, 0.5);
        assert_eq!(c.time_shift_hours, 0.0);
    }

    #[rstest]
    #[case("east", Octant::East)]
    #[case("Oost", Octant::East)]
    #[case("south-east", Octant::SouthEast)]
    #[case("zuidoost", Octant::SouthEast)]
    #[case("NW", Octant::NorthWest)]
    #[case(" noordwest ", Octant::NorthWest)]
    #[case("south_west", Octant::SouthWest)]
    #[case("n", Octant::North)]
    fn parses_names(#[case] name: &str, #[case] expected: Octant) {
        assert_eq!(Octant::from_name(name), Some(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Octant::from_name("up"), None);
        assert_eq!(Octant::from_name(""), None);
    }

    #[rstest]
    #[case(0.0, Octant::South)]
    #[case(90.0, Octant::West)]
    #[case(180.0, Octant::North)]
    #[case(270.0, Octant::East)]
    #[case(22.5, Octant::SouthWest)]
    #[case(22.4, Octant::South)]
    #[case(350.0, Octant::South)]
    #[case(315.0, Octant::SouthEast)]
    #[case(-90.0, Octant::East)]
    #[case(720.0 + 135.0, Octant::NorthWest)]
    fn maps_bearing_to_nearest_octant(#[case] bearing: f64, #[case] expected: Octant) {
        assert_eq!(Octant::from_bearing(bearing), expected);
    }
}
