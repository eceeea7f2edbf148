//! Named access to the two coordinate fields

use std::fmt;
use std::str::FromStr;

use crate::errors::CoordinateError;

/// One of the two scalars of a coordinate, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Latitude => "lat",
            Field::Longitude => "lon",
        }
    }
}

impl FromStr for Field {
    type Err = CoordinateError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lat" => Ok(Field::Latitude),
            "lon" => Ok(Field::Longitude),
            _ => Err(CoordinateError::UnknownField(name.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
