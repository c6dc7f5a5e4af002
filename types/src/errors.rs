use std::{error::Error, fmt, num::ParseFloatError};

use crate::axis::Direction;

/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// The caller violated the contract of a graticule computation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The target number of divisions should be positive
    ZeroDivisions,
    /// One of the interval bounds is NaN or infinite
    NonFiniteBound,
    /// The interval is so wide that even the coarsest step produces
    /// far more breaks than the divisions requested
    TooManyBreaks,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ZeroDivisions => "The target number of divisions should be at least 1",
            Self::NonFiniteBound => "The interval bounds should be finite numbers of degrees",
            Self::TooManyBreaks => "The interval is too wide for the requested number of divisions",
        };

        write!(f, "Invalid argument: {msg}")
    }
}

impl Error for InvalidArgument {}

/// The character is not one of the `N`, `S`, `E` or `W`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub(crate) failed: char,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse direction from {:?}", self.failed)
    }
}

impl Error for ParseDirectionError {}

/// Failure to read a coordinate back from its label
#[derive(Debug, Clone, PartialEq)]
// the `char` of the failed direction is the largest payload, still only 4 bytes
#[allow(variant_size_differences)]
pub enum ParseCoordinateError {
    /// Nothing to parse
    EmptyString,
    /// Neither a decimal number nor a Degree-Minute-Second notation
    Notation,
    /// Some numeric part is malformed
    Float(ParseFloatError),
    /// The suffix is not a direction letter
    Direction(ParseDirectionError),
    /// The direction does not belong to the parsed axis (e.g. `N` for a longitude)
    WrongAxis(Direction),
}

enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);
enum_trivial_from_impl!(ParseDirectionError => ParseCoordinateError:Direction);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::Notation => write!(f, "not a decimal or Degree-Minute-Second notation"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Direction(inner) => write!(f, "{inner}"),
            Self::WrongAxis(direction) => {
                write!(f, "direction {direction} does not belong to the axis")
            }
        }
    }
}

impl Error for ParseCoordinateError {}
