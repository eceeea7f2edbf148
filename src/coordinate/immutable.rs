//! Coordinate that never changes after construction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use super::lat_lon::{GeoPoint, LatLon};
use super::input::CoordinateInput;
use super::mutable::Coordinate;
use super::DEFAULT_DELIMITER;
use crate::errors::{CoordinateError, CoordinateResult};

/// A coordinate whose updates produce new values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImmutableCoordinate {
    inner: LatLon,
}

impl ImmutableCoordinate {
    /// Create a coordinate, failing on out-of-range or malformed input
    pub fn new<'a, 'b>(
        lat: impl Into<CoordinateInput<'a>>,
        lon: impl Into<CoordinateInput<'b>>,
    ) -> CoordinateResult<Self> {
        Ok(ImmutableCoordinate {
            inner: LatLon::new(lat, lon)?,
        })
    }

    /// Create a coordinate or `None` if either value is invalid
    pub fn safe<'a, 'b>(lat: impl Into<CoordinateInput<'a>>, lon: impl Into<CoordinateInput<'b>>) -> Option<Self> {
        LatLon::safe(lat, lon).map(ImmutableCoordinate::from)
    }

    pub fn parse(text: &str, delimiter: &str) -> Option<Self> {
        codec::parse(text, delimiter)
    }

    /// Copy with a new latitude and the same longitude
    pub fn with_latitude<'a>(&self, lat: impl Into<CoordinateInput<'a>>) -> CoordinateResult<Self> {
        Ok(ImmutableCoordinate {
            inner: self.inner.with_latitude(lat)?,
        })
    }

    /// Copy with a new longitude and the same latitude
    pub fn with_longitude<'a>(&self, lon: impl Into<CoordinateInput<'a>>) -> CoordinateResult<Self> {
        Ok(ImmutableCoordinate {
            inner: self.inner.with_longitude(lon)?,
        })
    }
}

impl GeoPoint for ImmutableCoordinate {
    fn lat_lon_pair(&self) -> LatLon {
        self.inner
    }
}

impl From<LatLon> for ImmutableCoordinate {
    fn from(inner: LatLon) -> Self {
        ImmutableCoordinate { inner }
    }
}

impl From<Coordinate> for ImmutableCoordinate {
    fn from(coords: Coordinate) -> Self {
        ImmutableCoordinate {
            inner: coords.lat_lon_pair(),
        }
    }
}

impl FromStr for ImmutableCoordinate {
    type Err = CoordinateError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        codec::try_parse(text, DEFAULT_DELIMITER)
    }
}

impl fmt::Display for ImmutableCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
