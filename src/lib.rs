pub mod errors;
pub mod coordinate;

pub use errors::{CoordinateError, CoordinateResult, InvalidReason};
pub use coordinate::{
    distance_between, is_valid_latitude, is_valid_longitude, Coordinate, CoordinateInput, GeoPoint, Hemisphere,
    ImmutableCoordinate, LatLon,
};
