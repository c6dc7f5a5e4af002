//! Numeric helpers which do not linked to the domain

/// Beyond that many fractional digits the scaling factor
/// no longer fits the `f64` mantissa.
const MAX_FRACTION_DIGITS: usize = 16;

/// The number of fractional decimal digits required to write the number exactly
/// (as in its shortest round-trip representation).
///
/// The exponential form `m.mmm e±x` is used, so both the large and the tiny
/// numbers are handled the same way: the fraction digits of the mantissa
/// shifted by the exponent.
pub fn decimal_places(x: f64) -> usize {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }

    let repr = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return 0;
    };

    let fraction_digits = mantissa.split_once('.').map_or(0, |(_, fract)| fract.len());
    let exponent: i64 = exponent.parse().unwrap_or_default();

    let places = i64::try_from(fraction_digits).unwrap_or(i64::MAX) - exponent;
    usize::try_from(places).unwrap_or(0)
}

/// Round half away from zero to the given number of fractional digits.
///
/// The negative zero never returned.
pub fn round_to(value: f64, places: usize) -> f64 {
    let places = places.min(MAX_FRACTION_DIGITS);
    let scale = 10_f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round a sexagesimal part (minutes of a degree or seconds of a minute)
/// to the given number of fractional digits.
///
/// When the rounded part reaches the full `units`, it wraps to zero
/// and the carry to the enclosing unit is reported as `true`.
pub(crate) fn round_with_carry(part: f64, places: usize, units: u8) -> (f64, bool) {
    let rounded = round_to(part, places);
    if rounded >= f64::from(units) {
        (0.0, true)
    } else {
        (rounded, false)
    }
}

/// Render the sexagesimal part with at least two digits before the decimal point
pub(crate) fn zero_padded(part: f64, places: usize) -> String {
    let places = places.min(MAX_FRACTION_DIGITS);
    let width = if places == 0 { 2 } else { places + 3 };
    format!("{part:0width$.places$}")
}
