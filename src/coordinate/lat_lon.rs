//! Validated latitude/longitude pair shared by both coordinate variants

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec;
use super::field::Field;
use super::geometry;
use super::hemisphere::Hemisphere;
use super::input::CoordinateInput;
use super::validation::{normalize_json_latitude, normalize_json_longitude, normalize_latitude, normalize_longitude};
use super::DEFAULT_DELIMITER;
use crate::errors::{CoordinateError, CoordinateResult};

/// A WGS-84 latitude/longitude pair that is always within range
///
/// The only ways to get one are [`LatLon::new`], [`LatLon::safe`], parsing
/// and deserialization, all of which validate. Equality and hashing follow
/// the canonical six-decimal key, so two values that differ only beyond the
/// sixth decimal are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawLatLon")]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    /// Validate both inputs, failing on the first invalid one
    pub fn new<'a, 'b>(
        lat: impl Into<CoordinateInput<'a>>,
        lon: impl Into<CoordinateInput<'b>>,
    ) -> CoordinateResult<Self> {
        let lat = normalize_latitude(lat)?;
        let lon = normalize_longitude(lon)?;
        Ok(LatLon { lat, lon })
    }

    /// Like [`LatLon::new`] but returns `None` on invalid input
    pub fn safe<'a, 'b>(lat: impl Into<CoordinateInput<'a>>, lon: impl Into<CoordinateInput<'b>>) -> Option<Self> {
        Self::new(lat, lon).ok()
    }

    /// Build from loosely-typed JSON scalars
    pub fn from_json(lat: &Value, lon: &Value) -> CoordinateResult<Self> {
        let lat = normalize_json_latitude(lat)?;
        let lon = normalize_json_longitude(lon)?;
        Ok(LatLon { lat, lon })
    }

    /// New pair with a replaced latitude, the receiver is left alone
    pub fn with_latitude<'a>(&self, lat: impl Into<CoordinateInput<'a>>) -> CoordinateResult<Self> {
        let lat = normalize_latitude(lat)?;
        Ok(LatLon { lat, lon: self.lon })
    }

    /// New pair with a replaced longitude, the receiver is left alone
    pub fn with_longitude<'a>(&self, lon: impl Into<CoordinateInput<'a>>) -> CoordinateResult<Self> {
        let lon = normalize_longitude(lon)?;
        Ok(LatLon { lat: self.lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Read-side behavior common to every coordinate type
///
/// Implementors only expose their validated [`LatLon`]; formatting, field
/// lookup and geometry are provided on top of it.
pub trait GeoPoint {
    /// The validated pair backing this value
    fn lat_lon_pair(&self) -> LatLon;

    /// Latitude in degrees, within [-90, 90]
    fn latitude(&self) -> f64 {
        self.lat_lon_pair().lat
    }

    /// Longitude in degrees, within [-180, 180]
    fn longitude(&self) -> f64 {
        self.lat_lon_pair().lon
    }

    fn latitude_hemisphere(&self) -> Hemisphere {
        Hemisphere::of_latitude(self.latitude())
    }

    fn longitude_hemisphere(&self) -> Hemisphere {
        Hemisphere::of_longitude(self.longitude())
    }

    /// Look a field up by name (`"lat"` or `"lon"`)
    fn get(&self, name: &str) -> CoordinateResult<f64> {
        match name.parse::<Field>()? {
            Field::Latitude => Ok(self.latitude()),
            Field::Longitude => Ok(self.longitude()),
        }
    }

    /// `"<lat>,<lon>"` with six fractional digits each
    fn key(&self) -> String {
        self.lat_lon(DEFAULT_DELIMITER)
    }

    /// Same as [`GeoPoint::key`] with a custom delimiter
    fn lat_lon(&self, delimiter: &str) -> String {
        codec::format_key(self.latitude(), self.longitude(), delimiter)
    }

    /// Great-circle distance to `other`, in meters
    fn distance<P: GeoPoint + ?Sized>(&self, other: &P) -> f64 {
        geometry::great_circle_distance(self.latitude(), self.longitude(), other.latitude(), other.longitude())
    }

    /// Whether this point lies inside a polygon of `(lat, lon)` vertices
    fn is_inside_polygon(&self, polygon: &[(f64, f64)]) -> bool {
        geometry::point_in_polygon(self.latitude(), self.longitude(), polygon)
    }
}

impl GeoPoint for LatLon {
    fn lat_lon_pair(&self) -> LatLon {
        *self
    }
}

/// Distance in meters between two raw latitude/longitude pairs
///
/// Fails if either pair does not validate.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> CoordinateResult<f64> {
    let from = LatLon::new(lat1, lon1)?;
    let to = LatLon::new(lat2, lon2)?;
    Ok(from.distance(&to))
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl PartialEq for LatLon {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LatLon {}

impl Hash for LatLon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Wire form before validation; each field may be a number or numeric string
#[derive(Deserialize)]
struct RawLatLon {
    lat: Value,
    lon: Value,
}

impl TryFrom<RawLatLon> for LatLon {
    type Error = CoordinateError;

    fn try_from(raw: RawLatLon) -> Result<Self, Self::Error> {
        LatLon::from_json(&raw.lat, &raw.lon)
    }
}
