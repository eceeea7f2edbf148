//! Accepted input kinds for latitude and longitude values

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// A raw latitude or longitude before validation
///
/// Only numbers and strings can ever become a coordinate. Anything else
/// (booleans, nulls, arrays, objects) is turned away at the boundary, see
/// [`CoordinateInput::from_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateInput<'a> {
    /// Floating point number, taken as-is
    Float(f64),
    /// Integer, widened to `f64`
    Integer(i64),
    /// Decimal text, must match the latitude/longitude grammar as a whole
    Text(Cow<'a, str>),
}

impl<'a> CoordinateInput<'a> {
    /// Convert a loosely-typed JSON value
    ///
    /// Returns `None` for booleans, nulls, arrays and objects regardless of
    /// whether they could be coerced to a number.
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Some(CoordinateInput::Integer(integer)),
                None => number.as_f64().map(CoordinateInput::Float),
            },
            Value::String(text) => Some(CoordinateInput::Text(Cow::Borrowed(text.as_str()))),
            Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Detach from any borrowed text
    pub fn into_owned(self) -> CoordinateInput<'static> {
        match self {
            CoordinateInput::Float(v) => CoordinateInput::Float(v),
            CoordinateInput::Integer(v) => CoordinateInput::Integer(v),
            CoordinateInput::Text(text) => CoordinateInput::Text(Cow::Owned(text.into_owned())),
        }
    }
}

impl fmt::Display for CoordinateInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateInput::Float(v) => write!(f, "{}", v),
            CoordinateInput::Integer(v) => write!(f, "{}", v),
            CoordinateInput::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for CoordinateInput<'_> {
    fn from(value: f64) -> Self {
        CoordinateInput::Float(value)
    }
}

impl From<f32> for CoordinateInput<'_> {
    fn from(value: f32) -> Self {
        CoordinateInput::Float(f64::from(value))
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CoordinateInput<'_> {
                fn from(value: $t) -> Self {
                    CoordinateInput::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<&'a str> for CoordinateInput<'a> {
    fn from(value: &'a str) -> Self {
        CoordinateInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for CoordinateInput<'a> {
    fn from(value: &'a String) -> Self {
        CoordinateInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for CoordinateInput<'_> {
    fn from(value: String) -> Self {
        CoordinateInput::Text(Cow::Owned(value))
    }
}
