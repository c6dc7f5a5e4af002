//! Reading the coordinates back from their labels.
//!
//! Everything [`format_coordinate`](crate::format_coordinate) produces can be parsed,
//! as well as the plain signed decimal degrees.

use graticule_types::{AxisKind, Direction, ParseCoordinateError, DEGREE_SIGN};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Construct regular expression to parse Degree-Minute-Second representation of an angle
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("\\*?", '\'', '"')
    } else {
        ("°", '′', '″')
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<sign>-)?                                    # optional minus when no direction is given
        (?P<deg>\d{{1,3}}(?:\.\d+)?)                    # mandatory degree VALUE, possibly decimal
        {deg}                                           # degree sign (can be mandatory or optional)
        (?:
            (?P<min>[0-5]\d(?:\.\d+)?)                      # two-digit minutes VALUE (00..=59)
            {min}                                           # arcminute sign
            (?:
                (?P<sec>[0-5]\d(?:\.\d+)?)                      # two-digit seconds VALUE (00..=59) with the fraction
                {sec}                                           # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

/// Split the trailing direction letter (with a single optional space before it)
fn split_direction(
    s: &str,
    axis: AxisKind,
) -> Result<(&str, Option<Direction>), ParseCoordinateError> {
    match s.chars().last() {
        Some(last) if last.is_ascii_uppercase() => {
            let direction = Direction::try_from(last)?;
            if !axis.allows(direction) {
                return Err(ParseCoordinateError::WrongAxis(direction));
            }

            let rest = &s[..s.len() - last.len_utf8()];
            let rest = rest.strip_suffix(' ').unwrap_or(rest);
            Ok((rest, Some(direction)))
        }
        _ => Ok((s, None)),
    }
}

fn captured_part(caps: &Captures<'_>, name: &str) -> Result<f64, ParseCoordinateError> {
    caps.name(name)
        .map_or(Ok(0.0), |part| part.as_str().parse())
        .map_err(ParseCoordinateError::from)
}

/// Parse the coordinate of the `axis` from a decimal number or a (possibly suffixed) label.
///
/// # Errors
/// - empty string;
/// - neither a number nor a Degree-Minute-Second notation;
/// - a direction letter of the other axis.
///
/// ```
/// # use graticule::{parse_coordinate, AxisKind};
/// assert_eq!(parse_coordinate("45° W", AxisKind::Longitude).unwrap(), -45.0);
/// assert_eq!(parse_coordinate("30°30′ N", AxisKind::Latitude).unwrap(), 30.5);
/// assert_eq!(parse_coordinate("-12.25", AxisKind::Latitude).unwrap(), -12.25);
/// ```
pub fn parse_coordinate(s: &str, axis: AxisKind) -> Result<f64, ParseCoordinateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    let number = s.strip_suffix(DEGREE_SIGN).unwrap_or(s);
    if let Ok(value) = number.parse::<f64>() {
        return Ok(value);
    }

    let (body, direction) = split_direction(s, axis)?;
    let caps = RE_UNICODE
        .captures(body)
        .or_else(|| RE_ASCII.captures(body))
        .ok_or(ParseCoordinateError::Notation)?;

    if direction.is_some() && caps.name("sign").is_some() {
        // both `-` and the direction given
        return Err(ParseCoordinateError::Notation);
    }

    let degrees = captured_part(&caps, "deg")?;
    let minutes = captured_part(&caps, "min")?;
    let seconds = captured_part(&caps, "sec")?;
    let value = degrees + minutes / 60.0 + seconds / 3600.0;

    let positive = match direction {
        Some(direction) => direction.is_positive(),
        None => caps.name("sign").is_none(),
    };

    Ok(if positive { value } else { -value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format_coordinate, step::ONE_MINUTE};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn plain_decimal() {
        assert_close(parse_coordinate("12.5", AxisKind::Latitude).unwrap(), 12.5);
        assert_close(parse_coordinate(" -120 ", AxisKind::Longitude).unwrap(), -120.0);
        assert_close(parse_coordinate("33.25°", AxisKind::Latitude).unwrap(), 33.25);
    }

    #[test]
    fn degrees_with_direction() {
        assert_close(parse_coordinate("45° W", AxisKind::Longitude).unwrap(), -45.0);
        assert_close(parse_coordinate("45°E", AxisKind::Longitude).unwrap(), 45.0);
        assert_close(parse_coordinate("120.5° E", AxisKind::Longitude).unwrap(), 120.5);
    }

    #[test]
    fn degrees_minutes() {
        assert_close(parse_coordinate("30°30′ N", AxisKind::Latitude).unwrap(), 30.5);
        assert_close(parse_coordinate("0°02′ W", AxisKind::Longitude).unwrap(), -2.0 / 60.0);
    }

    #[test]
    fn degrees_minutes_seconds() {
        assert_close(
            parse_coordinate("33°52′08″ S", AxisKind::Latitude).unwrap(),
            -(33.0 + 52.0 / 60.0 + 8.0 / 3600.0),
        );
        assert_close(
            parse_coordinate("12°20′44.2″", AxisKind::Latitude).unwrap(),
            12.0 + 20.0 / 60.0 + 44.2 / 3600.0,
        );
    }

    #[test]
    fn ascii_notation() {
        assert_close(
            parse_coordinate("10*30'15\" E", AxisKind::Longitude).unwrap(),
            10.0 + 30.0 / 60.0 + 15.0 / 3600.0,
        );
    }

    #[test]
    fn negative_dms() {
        assert_close(parse_coordinate("-5°30′", AxisKind::Latitude).unwrap(), -5.5);
    }

    #[test]
    #[should_panic(expected = "EmptyString")]
    fn empty() {
        let _v = parse_coordinate("  ", AxisKind::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn garbage() {
        let _v = parse_coordinate("twelve", AxisKind::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn too_many_minutes() {
        let _v = parse_coordinate("12°75′ N", AxisKind::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn sign_and_direction() {
        let _v = parse_coordinate("-12°30′ S", AxisKind::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "WrongAxis(North)")]
    fn latitude_letter_for_longitude() {
        let _v = parse_coordinate("12° N", AxisKind::Longitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Direction")]
    fn unknown_letter() {
        let _v = parse_coordinate("12° X", AxisKind::Longitude).unwrap();
    }

    #[test]
    fn reads_formatted_labels() {
        let value = -0.033_333_334;
        let label = format_coordinate(value, ONE_MINUTE, AxisKind::Longitude);
        let parsed = parse_coordinate(&label, AxisKind::Longitude).unwrap();
        assert!((parsed - value).abs() < ONE_MINUTE / 2.0);
    }
}
