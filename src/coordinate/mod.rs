//! WGS-84 coordinate handling
//!
//! This module provides validated latitude/longitude values in two flavors,
//! [`Coordinate`] (mutable in place) and [`ImmutableCoordinate`] (updates
//! return new values), both built on the shared [`LatLon`] pair.

mod codec;
mod lat_lon;
mod field;
mod geometry;
mod hemisphere;
mod immutable;
mod input;
mod mutable;
mod validation;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::codec::{format_key, parse, try_parse};
pub use self::lat_lon::{distance_between, GeoPoint, LatLon};
pub use self::field::Field;
pub use self::geometry::{great_circle_distance, point_in_polygon};
pub use self::hemisphere::Hemisphere;
pub use self::immutable::ImmutableCoordinate;
pub use self::input::CoordinateInput;
pub use self::mutable::Coordinate;
pub use self::validation::{
    is_valid_latitude, is_valid_longitude, normalize_json_latitude, normalize_json_longitude, normalize_latitude,
    normalize_longitude, LATITUDE_PATTERN, LONGITUDE_PATTERN,
};

/// Mean Earth radius in meters used for great-circle distances
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Delimiter between latitude and longitude in keys and parsed strings
pub const DEFAULT_DELIMITER: &str = ",";

/// Fractional digits in the canonical key
pub const KEY_PRECISION: usize = 6;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
