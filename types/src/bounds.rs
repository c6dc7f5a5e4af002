#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::AxisKind;

/// The visible rectangle of a map viewport, in degrees
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The leftmost longitude
    pub west: f64,
    /// The rightmost longitude
    pub east: f64,
    /// The bottom latitude
    pub south: f64,
    /// The top latitude
    pub north: f64,
}

impl Bounds {
    /// Construct the viewport from its four edges
    pub const fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// The `(min, max)` interval covered along the axis
    pub const fn interval(&self, axis: AxisKind) -> (f64, f64) {
        match axis {
            AxisKind::Longitude => (self.west, self.east),
            AxisKind::Latitude => (self.south, self.north),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        let bounds = Bounds::new(-10.0, 10.0, 40.0, 50.0);
        assert_eq!(bounds.interval(AxisKind::Longitude), (-10.0, 10.0));
        assert_eq!(bounds.interval(AxisKind::Latitude), (40.0, 50.0));
    }
}
