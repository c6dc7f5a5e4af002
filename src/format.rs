//! Human-readable labels for the grid breaks:
//! either the decimal degrees or the Degree-Minute-Second notation
//! depending on how fine the grid step is.

use std::fmt;

use graticule_types::{
    AxisKind, ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE,
};

use crate::{
    step::{ONE_MINUTE, ONE_SECOND},
    utils::{round_with_carry, zero_padded},
};

/// How detailed the label should be to distinguish the adjacent breaks
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Granularity {
    /// Plain decimal degrees: `12°`
    Degrees,
    /// Degrees and whole arc minutes: `12°05′`
    Minutes,
    /// Degrees, minutes and arc seconds with the given number of fractional digits:
    /// `12°05′30″` or `12°05′30.25″`
    Seconds {
        /// Fractional digits of the arc seconds
        places: usize,
    },
}

impl Granularity {
    /// Choose the granularity for the breaks generated with the `step`.
    ///
    /// The minute and second thresholds are the table entries
    /// [`ONE_MINUTE`] and [`ONE_SECOND`] (rounded up to 9 decimal digits),
    /// so every table step renders as intended. An exact `1.0 / 60.0`
    /// is slightly below the stored minute and gets the seconds rendering.
    pub fn for_step(step: f64) -> Self {
        if step >= 1.0 {
            Self::Degrees
        } else if step >= ONE_MINUTE {
            Self::Minutes
        } else if step >= ONE_SECOND {
            Self::Seconds { places: 0 }
        } else {
            // NaN and the negative logarithm of zero step are both clamped
            let places = (-(step * 3600.0).log10()).ceil().max(0.0);
            Self::Seconds {
                places: places as usize,
            }
        }
    }
}

/// Absolute value as `D°MM′` with `places` fractional digits of the minutes.
///
/// The minutes rounded up to the whole degree carry into the degrees.
///
/// ```
/// # use graticule::format::to_degrees_minutes;
/// assert_eq!(to_degrees_minutes(30.5, 0), "30°30′");
/// assert_eq!(to_degrees_minutes(-0.999_999_999, 0), "1°00′");
/// ```
pub fn to_degrees_minutes(value: f64, places: usize) -> String {
    let value = value.abs();
    let mut degrees = value.floor();

    let (minutes, carry) =
        round_with_carry((value - degrees) * 60.0, places, MINUTES_IN_DEGREE);
    if carry {
        degrees += 1.0;
    }

    format!(
        "{}{}{}{}",
        degrees,
        DEGREE_SIGN,
        zero_padded(minutes, places),
        ARC_MINUTE_SIGN
    )
}

/// Absolute value as `D°MM′SS″` with `places` fractional digits of the seconds.
///
/// The rounded seconds carry into the minutes and the minutes into the degrees,
/// so the `60` never appears in either field.
///
/// ```
/// # use graticule::format::to_degrees_minutes_seconds;
/// assert_eq!(to_degrees_minutes_seconds(12.3456, 1), "12°20′44.2″");
/// assert_eq!(to_degrees_minutes_seconds(-0.999_999_999_999, 0), "1°00′00″");
/// ```
pub fn to_degrees_minutes_seconds(value: f64, places: usize) -> String {
    let value = value.abs();
    let mut degrees = value.floor();
    let fraction = value - degrees;

    let minutes = (fraction * 60.0).floor();
    let (seconds, carry) =
        round_with_carry((fraction * 3600.0) % 60.0, places, SECONDS_IN_MINUTE);

    let minutes = if carry { minutes + 1.0 } else { minutes };
    let (minutes, carry) = round_with_carry(minutes, 0, MINUTES_IN_DEGREE);
    if carry {
        degrees += 1.0;
    }

    format!(
        "{}{}{}{}{}{}",
        degrees,
        DEGREE_SIGN,
        zero_padded(minutes, 0),
        ARC_MINUTE_SIGN,
        zero_padded(seconds, places),
        ARC_SECOND_SIGN
    )
}

/// The label of a grid break.
///
/// The digits are rendered from the absolute value,
/// while the direction suffix follows the sign of the original value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateLabel {
    value: f64,
    step: f64,
    axis: AxisKind,
}

impl CoordinateLabel {
    /// The label of the `value` produced with the `step` on the `axis`
    pub const fn new(value: f64, step: f64, axis: AxisKind) -> Self {
        Self { value, step, axis }
    }

    /// The granularity the label is rendered with
    pub fn granularity(&self) -> Granularity {
        Granularity::for_step(self.step)
    }
}

impl fmt::Display for CoordinateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.granularity() {
            Granularity::Degrees => write!(f, "{}{}", self.value.abs(), DEGREE_SIGN)?,
            Granularity::Minutes => write!(f, "{}", to_degrees_minutes(self.value, 0))?,
            Granularity::Seconds { places } => {
                write!(f, "{}", to_degrees_minutes_seconds(self.value, places))?;
            }
        }

        if let Some(direction) = self.axis.direction(self.value) {
            write!(f, " {direction}")?;
        }

        Ok(())
    }
}

/// Render the break `value` generated with the `step` as a label for the `axis`.
///
/// ```
/// # use graticule::{format_coordinate, AxisKind};
/// assert_eq!(format_coordinate(-45.0, 1.0, AxisKind::Longitude), "45° W");
/// assert_eq!(format_coordinate(30.5, 0.5, AxisKind::Latitude), "30°30′ N");
/// assert_eq!(format_coordinate(0.0, 1.0, AxisKind::Latitude), "0°");
/// ```
pub fn format_coordinate(value: f64, step: f64, axis: AxisKind) -> String {
    CoordinateLabel::new(value, step, axis).to_string()
}
