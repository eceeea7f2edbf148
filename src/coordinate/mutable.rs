//! Coordinate with in-place setters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use super::lat_lon::{GeoPoint, LatLon};
use super::field::Field;
use super::immutable::ImmutableCoordinate;
use super::input::CoordinateInput;
use super::DEFAULT_DELIMITER;
use crate::errors::{CoordinateError, CoordinateResult};

/// A coordinate whose latitude and longitude can be changed in place
///
/// Setters validate before assigning, so a failed update leaves the previous
/// value untouched. Reads are safe from many threads; writes need a single
/// owner or an external lock, as with any `&mut` access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate {
    inner: LatLon,
}

impl Coordinate {
    /// Create a coordinate, failing on out-of-range or malformed input
    ///
    /// # Arguments
    /// * `lat` - Latitude as a number or decimal string
    /// * `lon` - Longitude as a number or decimal string
    pub fn new<'a, 'b>(
        lat: impl Into<CoordinateInput<'a>>,
        lon: impl Into<CoordinateInput<'b>>,
    ) -> CoordinateResult<Self> {
        Ok(Coordinate {
            inner: LatLon::new(lat, lon)?,
        })
    }

    /// Create a coordinate or `None` if either value is invalid
    pub fn safe<'a, 'b>(lat: impl Into<CoordinateInput<'a>>, lon: impl Into<CoordinateInput<'b>>) -> Option<Self> {
        LatLon::safe(lat, lon).map(Coordinate::from)
    }

    /// Parse `"lat<delimiter>lon"`, see [`codec::parse`]
    pub fn parse(text: &str, delimiter: &str) -> Option<Self> {
        codec::parse(text, delimiter)
    }

    /// Change latitude, returning `self` for chaining
    pub fn set_latitude<'a>(&mut self, lat: impl Into<CoordinateInput<'a>>) -> CoordinateResult<&mut Self> {
        self.inner = self.inner.with_latitude(lat)?;
        Ok(self)
    }

    /// Change longitude, returning `self` for chaining
    pub fn set_longitude<'a>(&mut self, lon: impl Into<CoordinateInput<'a>>) -> CoordinateResult<&mut Self> {
        self.inner = self.inner.with_longitude(lon)?;
        Ok(self)
    }

    /// Change a field by name (`"lat"` or `"lon"`)
    pub fn set<'a>(&mut self, name: &str, value: impl Into<CoordinateInput<'a>>) -> CoordinateResult<&mut Self> {
        match name.parse::<Field>()? {
            Field::Latitude => self.set_latitude(value),
            Field::Longitude => self.set_longitude(value),
        }
    }
}

impl GeoPoint for Coordinate {
    fn lat_lon_pair(&self) -> LatLon {
        self.inner
    }
}

impl From<LatLon> for Coordinate {
    fn from(inner: LatLon) -> Self {
        Coordinate { inner }
    }
}

impl From<ImmutableCoordinate> for Coordinate {
    fn from(coords: ImmutableCoordinate) -> Self {
        Coordinate {
            inner: coords.lat_lon_pair(),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        codec::try_parse(text, DEFAULT_DELIMITER)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
