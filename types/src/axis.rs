use std::{fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParseDirectionError;

/// Cardinal direction used as a suffix of a coordinate label
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Positive latitudes
    North,
    /// Negative latitudes
    South,
    /// Positive longitudes
    East,
    /// Negative longitudes
    West,
}

impl Direction {
    /// Does the direction correspond to the positive values of its axis
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::North | Self::East)
    }

    /// The axis the direction is measured along
    pub const fn axis(self) -> AxisKind {
        match self {
            Self::North | Self::South => AxisKind::Latitude,
            Self::East | Self::West => AxisKind::Longitude,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(ParseDirectionError { failed: c }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which of the two graticule axes a value belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisKind {
    /// Meridians, measured along the west-east axis
    Longitude,
    /// Parallels, measured along the south-north axis
    Latitude,
}

impl AxisKind {
    /// Direction of the signed value on the axis.
    ///
    /// The zero (of any sign) and NaN has no direction.
    ///
    /// ```
    /// # use graticule_types::{AxisKind, Direction};
    /// assert_eq!(AxisKind::Longitude.direction(-45.0), Some(Direction::West));
    /// assert_eq!(AxisKind::Latitude.direction(12.5), Some(Direction::North));
    /// assert_eq!(AxisKind::Latitude.direction(-0.0), None);
    /// ```
    pub fn direction(self, value: f64) -> Option<Direction> {
        let positive = if value > 0.0 {
            true
        } else if value < 0.0 {
            false
        } else {
            return None;
        };

        let direction = match self {
            Self::Longitude => Direction::East,
            Self::Latitude => Direction::North,
        };

        Some(if positive { direction } else { -direction })
    }

    /// Is the direction letter valid for the axis
    pub fn allows(self, direction: Direction) -> bool {
        direction.axis() == self
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Longitude => "lng",
            Self::Latitude => "lat",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_directions() {
        assert_eq!(AxisKind::Longitude.direction(10.0), Some(Direction::East));
        assert_eq!(AxisKind::Longitude.direction(-0.1), Some(Direction::West));
        assert_eq!(AxisKind::Longitude.direction(0.0), None);
    }

    #[test]
    fn latitude_directions() {
        assert_eq!(AxisKind::Latitude.direction(89.9), Some(Direction::North));
        assert_eq!(AxisKind::Latitude.direction(-30.0), Some(Direction::South));
        assert_eq!(AxisKind::Latitude.direction(-0.0), None);
    }

    #[test]
    fn nan_has_no_direction() {
        assert_eq!(AxisKind::Latitude.direction(f64::NAN), None);
    }

    #[test]
    fn opposite() {
        assert_eq!(-Direction::North, Direction::South);
        assert_eq!(-Direction::West, Direction::East);
    }

    #[test]
    fn parse_and_print() {
        for ch in ['N', 'S', 'E', 'W'] {
            let direction = Direction::try_from(ch).unwrap();
            assert_eq!(direction.to_string(), ch.to_string());
        }
    }

    #[test]
    #[should_panic(expected = "'X'")]
    fn bad_direction() {
        let _d = Direction::try_from('X').unwrap();
    }

    #[test]
    fn axis_letters() {
        assert!(AxisKind::Longitude.allows(Direction::West));
        assert!(!AxisKind::Longitude.allows(Direction::South));
        assert!(AxisKind::Latitude.allows(Direction::North));
        assert!(!AxisKind::Latitude.allows(Direction::East));
    }
}
