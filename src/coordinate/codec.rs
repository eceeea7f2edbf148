//! Parsing and formatting of `"lat<delimiter>lon"` strings

use log::debug;

use super::lat_lon::LatLon;
use super::KEY_PRECISION;
use crate::errors::{CoordinateError, CoordinateResult};

/// Render a pair with exactly [`KEY_PRECISION`] fractional digits each
pub fn format_key(lat: f64, lon: f64, delimiter: &str) -> String {
    format!(
        "{:.prec$}{}{:.prec$}",
        lat,
        delimiter,
        lon,
        prec = KEY_PRECISION
    )
}

/// Parse `"lat<delimiter>lon"`, returning `None` when it is not a valid pair
///
/// The text must split on `delimiter` into exactly two segments, and each
/// segment must be a complete in-range number. A pair embedded in longer
/// text is not picked out.
pub fn parse<T: From<LatLon>>(text: &str, delimiter: &str) -> Option<T> {
    try_parse(text, delimiter).ok()
}

/// Same as [`parse`] but reports a [`CoordinateError::ParseFailure`]
pub fn try_parse<T: From<LatLon>>(text: &str, delimiter: &str) -> CoordinateResult<T> {
    if delimiter.is_empty() {
        debug!("Cannot split '{}' on an empty delimiter", text);
        return Err(CoordinateError::ParseFailure(text.to_string()));
    }

    let segments: Vec<&str> = text.split(delimiter).collect();
    if segments.len() != 2 {
        debug!(
            "Splitting '{}' on '{}' gave {} segments instead of 2",
            text,
            delimiter,
            segments.len()
        );
        return Err(CoordinateError::ParseFailure(text.to_string()));
    }

    match LatLon::safe(segments[0], segments[1]) {
        Some(pair) => Ok(T::from(pair)),
        None => Err(CoordinateError::ParseFailure(text.to_string())),
    }
}
