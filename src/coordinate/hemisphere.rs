//! Hemisphere classification

use std::fmt;

/// Coarse sign-based side of the globe
///
/// Zero belongs to the positive side: latitude 0 is north, longitude 0 is east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn of_latitude(lat: f64) -> Self {
        if lat >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn of_longitude(lon: f64) -> Self {
        if lon >= 0.0 {
            Hemisphere::East
        } else {
            Hemisphere::West
        }
    }

    /// Single-letter code: `N`, `S`, `E` or `W`
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
