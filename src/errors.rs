//! Custom error types for coordinate handling

use std::fmt;

/// Why a latitude or longitude input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Input kind can never be a coordinate (boolean, null, array, object)
    UnsupportedType,
    /// String outside the numeric grammar, or a NaN
    Malformed,
    /// Numeric value outside the allowed range
    OutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::UnsupportedType => write!(f, "unsupported input type"),
            InvalidReason::Malformed => write!(f, "not a plain decimal number"),
            InvalidReason::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Coordinate-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Latitude is not numeric or not within [-90, 90]
    InvalidLatitude {
        input: String,
        reason: InvalidReason,
    },
    /// Longitude is not numeric or not within [-180, 180]
    InvalidLongitude {
        input: String,
        reason: InvalidReason,
    },
    /// Text did not split into exactly two valid numeric segments
    ParseFailure(String),
    /// Named field lookup with a name other than `lat` or `lon`
    UnknownField(String),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidLatitude { input, reason } => write!(
                f,
                "Latitude must be numeric between or equal from -90 to 90 degrees, got '{}' ({})",
                input, reason
            ),
            CoordinateError::InvalidLongitude { input, reason } => write!(
                f,
                "Longitude must be numeric between or equal from -180 to 180 degrees, got '{}' ({})",
                input, reason
            ),
            CoordinateError::ParseFailure(text) => write!(f, "Unable to parse coordinates from '{}'", text),
            CoordinateError::UnknownField(name) => {
                write!(f, "Value '{}' does not exist or it is not accessible", name)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

impl CoordinateError {
    /// Reason of a latitude/longitude rejection, `None` for the other kinds
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            CoordinateError::InvalidLatitude { reason, .. }
            | CoordinateError::InvalidLongitude { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result type for coordinate operations
pub type CoordinateResult<T> = Result<T, CoordinateError>;
