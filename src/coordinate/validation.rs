//! Latitude and longitude validation
//!
//! Decides whether a raw input is an acceptable WGS-84 latitude or longitude
//! and normalizes it to `f64`. Strings must match the decimal grammar in full:
//! optional leading `-`, 1-2 (latitude) or 1-3 (longitude) integer digits and
//! an optional fraction of up to 99 digits. No `+`, no exponent, no whitespace.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::input::CoordinateInput;
use super::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::errors::{CoordinateError, CoordinateResult, InvalidReason};

/// Decimal grammar of a latitude string
pub const LATITUDE_PATTERN: &str = r"-?[0-9]{1,2}(?:\.[0-9]{1,99})?";

/// Decimal grammar of a longitude string
pub const LONGITUDE_PATTERN: &str = r"-?[0-9]{1,3}(?:\.[0-9]{1,99})?";

lazy_static! {
    static ref LATITUDE_RE: Regex =
        Regex::new(&format!("^{}$", LATITUDE_PATTERN)).expect("latitude pattern is a valid regex");
    static ref LONGITUDE_RE: Regex =
        Regex::new(&format!("^{}$", LONGITUDE_PATTERN)).expect("longitude pattern is a valid regex");
}

/// Check if input is a valid latitude, a number between -90 and 90 inclusive
pub fn is_valid_latitude<'a>(input: impl Into<CoordinateInput<'a>>) -> bool {
    normalize_latitude(input).is_ok()
}

/// Check if input is a valid longitude, a number between -180 and 180 inclusive
pub fn is_valid_longitude<'a>(input: impl Into<CoordinateInput<'a>>) -> bool {
    normalize_longitude(input).is_ok()
}

/// Validate a latitude and return it as `f64`
pub fn normalize_latitude<'a>(input: impl Into<CoordinateInput<'a>>) -> CoordinateResult<f64> {
    let input = input.into();
    normalize(&input, &LATITUDE_RE, MIN_LATITUDE, MAX_LATITUDE).map_err(|reason| {
        debug!("Rejected latitude '{}': {}", input, reason);
        CoordinateError::InvalidLatitude {
            input: input.to_string(),
            reason,
        }
    })
}

/// Validate a longitude and return it as `f64`
pub fn normalize_longitude<'a>(input: impl Into<CoordinateInput<'a>>) -> CoordinateResult<f64> {
    let input = input.into();
    normalize(&input, &LONGITUDE_RE, MIN_LONGITUDE, MAX_LONGITUDE).map_err(|reason| {
        debug!("Rejected longitude '{}': {}", input, reason);
        CoordinateError::InvalidLongitude {
            input: input.to_string(),
            reason,
        }
    })
}

/// Validate a loosely-typed JSON value as a latitude
pub fn normalize_json_latitude(value: &serde_json::Value) -> CoordinateResult<f64> {
    match CoordinateInput::from_json(value) {
        Some(input) => normalize_latitude(input),
        None => {
            debug!("Rejected latitude of unsupported type: {}", value);
            Err(CoordinateError::InvalidLatitude {
                input: value.to_string(),
                reason: InvalidReason::UnsupportedType,
            })
        }
    }
}

/// Validate a loosely-typed JSON value as a longitude
pub fn normalize_json_longitude(value: &serde_json::Value) -> CoordinateResult<f64> {
    match CoordinateInput::from_json(value) {
        Some(input) => normalize_longitude(input),
        None => {
            debug!("Rejected longitude of unsupported type: {}", value);
            Err(CoordinateError::InvalidLongitude {
                input: value.to_string(),
                reason: InvalidReason::UnsupportedType,
            })
        }
    }
}

fn normalize(input: &CoordinateInput, grammar: &Regex, min: f64, max: f64) -> Result<f64, InvalidReason> {
    let value = match input {
        CoordinateInput::Float(v) => *v,
        CoordinateInput::Integer(v) => *v as f64,
        CoordinateInput::Text(text) => {
            if !grammar.is_match(text) {
                return Err(InvalidReason::Malformed);
            }
            text.parse::<f64>().map_err(|_| InvalidReason::Malformed)?
        }
    };

    if value.is_nan() {
        return Err(InvalidReason::Malformed);
    }
    if value < min || value > max {
        return Err(InvalidReason::OutOfRange);
    }

    Ok(value)
}
