//! Spherical distance and planar point-in-polygon on raw degree pairs
//!
//! Both functions assume their inputs are already validated. Nothing here
//! fails: callers get a number or a boolean.

use log::trace;

use super::EARTH_RADIUS;

/// Great-circle distance in meters between two points given in degrees
///
/// Uses the Vincenty form of the central angle on a sphere of radius
/// [`EARTH_RADIUS`], which stays accurate for both tiny and antipodal
/// separations.
pub fn great_circle_distance(lat_from: f64, lon_from: f64, lat_to: f64, lon_to: f64) -> f64 {
    let phi1 = lat_from.to_radians();
    let phi2 = lat_to.to_radians();
    let lon_delta = lon_to.to_radians() - lon_from.to_radians();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_phi2, cos_phi2) = phi2.sin_cos();
    let (sin_delta, cos_delta) = lon_delta.sin_cos();

    let a = (cos_phi2 * sin_delta).powi(2) + (cos_phi1 * sin_phi2 - sin_phi1 * cos_phi2 * cos_delta).powi(2);
    let b = sin_phi1 * sin_phi2 + cos_phi1 * cos_phi2 * cos_delta;

    let angle = a.sqrt().atan2(b);
    let distance = angle * EARTH_RADIUS;

    trace!(
        "Distance {},{} -> {},{}: {} m",
        lat_from, lon_from, lat_to, lon_to, distance
    );

    distance
}

/// Even-odd ray casting with longitude as the horizontal axis
///
/// `polygon` holds `(lat, lon)` vertices in order; the last vertex connects
/// back to the first, so it does not need to be repeated. The embedding is
/// planar, good for city-sized regions. Points exactly on an edge may land on
/// either side. An empty polygon contains nothing.
pub fn point_in_polygon(lat: f64, lon: f64, polygon: &[(f64, f64)]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let mut crossings = 0usize;
    let mut p1 = polygon[0];

    for i in 1..=n {
        let p2 = polygon[i % n];
        let (lat1, lon1) = p1;
        let (lat2, lon2) = p2;

        if lon > lon1.min(lon2) && lon <= lon1.max(lon2) && lat <= lat1.max(lat2) && lon1 != lon2 {
            let lat_intersection = (lon - lon1) * (lat2 - lat1) / (lon2 - lon1) + lat1;
            if lat1 == lat2 || lat <= lat_intersection {
                crossings += 1;
            }
        }

        p1 = p2;
    }

    trace!("Point {},{} crosses {} polygon edges", lat, lon, crossings);

    crossings % 2 != 0
}
