//! Selection of a "nice" angular step for an axis interval
//! and generation of the grid breaks aligned to that step.
//!
//! The step is never derived continuously: it is always one of the
//! [`NICE_STEPS`] (whole degrees, arc minutes or arc seconds),
//! so the grid lines land on values a human reads easily.

use graticule_types::InvalidArgument;
use log::{debug, trace};

use crate::utils::{decimal_places, round_to};

/// The single arc minute in degrees (as stored in the table)
pub const ONE_MINUTE: f64 = 0.016_666_667;

/// The single arc second in degrees (as stored in the table)
pub const ONE_SECOND: f64 = 0.000_277_778;

/// The finest step ever selected
pub const FINEST_STEP: f64 = ONE_SECOND;

/// Candidate steps in strictly descending order.
///
/// The sexagesimal fractions are truncated to 9 decimal digits,
/// so every break generated from them is written with at most 9 digits.
pub const NICE_STEPS: [f64; 19] = [
    // degrees
    60.0,
    30.0,
    20.0,
    10.0,
    5.0,
    2.0,
    1.0,
    // arc minutes
    0.5, // 30′
    0.333_333_333, // 20′
    0.166_666_667, // 10′
    0.083_333_333, // 5′
    0.033_333_333, // 2′
    ONE_MINUTE,
    // arc seconds
    0.008_333_333, // 30″
    0.005_555_556, // 20″
    0.002_777_778, // 10″
    0.001_388_889, // 5″
    0.000_555_556, // 2″
    ONE_SECOND,
];

/// Adjacent table steps differ at most 2.5 times, so a step chosen
/// below the coarsest one never yields more breaks than that per division.
const MAX_BREAKS_PER_DIVISION: f64 = 3.0;

/// Breaks allowed when the coarsest step is forced by the interval width
/// (more than ten full turns of 60° meridians).
const MAX_COARSE_BREAKS: f64 = 64.0;

fn max_breaks(target: u32) -> f64 {
    f64::from(target)
        .mul_add(MAX_BREAKS_PER_DIVISION, 2.0)
        .max(MAX_COARSE_BREAKS)
}

/// The largest table step not exceeding the `rough` one.
///
/// Falls back to the [`FINEST_STEP`] when the `rough` step is smaller
/// than any of the table (or is NaN).
///
/// ```
/// # use graticule::step::nice_step;
/// assert_eq!(nice_step(6.67), 5.0);
/// assert_eq!(nice_step(1000.0), 60.0);
/// assert_eq!(nice_step(1e-9), 0.000_277_778);
/// ```
pub fn nice_step(rough: f64) -> f64 {
    NICE_STEPS
        .iter()
        .copied()
        .find(|&step| rough >= step)
        .unwrap_or(FINEST_STEP)
}

/// The chosen step along with the grid breaks it produces
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// One of the [`NICE_STEPS`]
    pub step: f64,
    /// Ascending multiples of the step lying inside the interval,
    /// written with the fixed number of decimal digits of the step
    pub breaks: Vec<String>,
}

impl StepResult {
    fn empty(step: f64) -> Self {
        Self {
            step,
            breaks: Vec::new(),
        }
    }

    /// Nothing to draw on the axis
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// The number of breaks
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// The breaks as numbers of degrees
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.breaks.iter().filter_map(|b| b.parse().ok())
    }
}

/// Choose the step for the interval `[min, max]` to get roughly `target` divisions
/// and generate the breaks.
///
/// The `target` is only a hint: coarser steps are preferred over the exact
/// number of divisions. The reversed interval produces no breaks.
///
/// # Errors
/// - the `target` is zero;
/// - any of the bounds is not finite;
/// - the interval is so wide that even the 60° step gives
///   many times more breaks than the `target`.
///
/// ```
/// # use graticule::step::select_step;
/// let res = select_step(-10.0, 10.0, 3).unwrap();
/// assert_eq!(res.step, 5.0);
/// assert_eq!(res.breaks, ["-5", "0", "5", "10"]);
/// ```
pub fn select_step(min: f64, max: f64, target: u32) -> Result<StepResult, InvalidArgument> {
    if target == 0 {
        return Err(InvalidArgument::ZeroDivisions);
    }

    if !(min.is_finite() && max.is_finite()) {
        return Err(InvalidArgument::NonFiniteBound);
    }

    if min > max {
        debug!("Reversed interval [{min}, {max}]: no breaks");
        return Ok(StepResult::empty(FINEST_STEP));
    }

    let rough = (max - min) / f64::from(target);
    let step = nice_step(rough);
    let places = decimal_places(step);

    // the first break is strictly greater than the `min`
    let level_min = round_to(((min / step).floor() + 1.0) * step, places);
    let level_max = round_to((max / step).floor() * step, places);

    let count = ((level_max - level_min) / step).round() + 1.0;
    if count <= 0.0 {
        debug!("No multiples of {step} inside [{min}, {max}]");
        return Ok(StepResult::empty(step));
    }

    if count > max_breaks(target) {
        debug!("{count} breaks of {step} in [{min}, {max}] for {target} divisions");
        return Err(InvalidArgument::TooManyBreaks);
    }

    let breaks: Vec<_> = (0..count as u64)
        .map(|j| round_to(level_min + j as f64 * step, places))
        .filter(|value| {
            let inside = (min..=max).contains(value);
            if !inside {
                trace!("Break {value} is outside of [{min}, {max}]");
            }
            inside
        })
        .map(|value| format!("{value:.places$}"))
        .collect();

    debug!(
        "Step {step} (rough {rough}) gives {} breaks in [{min}, {max}]",
        breaks.len()
    );

    Ok(StepResult { step, breaks })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        assert!(NICE_STEPS.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(NICE_STEPS.last(), Some(&FINEST_STEP));
    }

    #[test]
    fn whole_degrees() {
        let res = select_step(-10.0, 10.0, 3).unwrap();
        assert_eq!(res.step, 5.0);
        assert_eq!(res.breaks, ["-5", "0", "5", "10"]);
    }

    #[test]
    fn lower_bound_excluded() {
        let res = select_step(-90.0, 90.0, 2).unwrap();
        assert_eq!(res.step, 60.0);
        assert_eq!(res.breaks, ["-60", "0", "60"]);
    }

    #[test]
    fn upper_bound_included() {
        let res = select_step(-180.0, 180.0, 3).unwrap();
        assert_eq!(res.step, 60.0);
        assert_eq!(res.breaks, ["-120", "-60", "0", "60", "120", "180"]);
    }

    #[test]
    fn arc_minutes() {
        let res = select_step(120.01, 120.05, 2).unwrap();
        assert_eq!(res.step, ONE_MINUTE);
        assert_eq!(res.breaks, ["120.016669067", "120.033335734"]);
    }

    #[test]
    fn negative_arc_minutes() {
        let res = select_step(-0.05, -0.01, 2).unwrap();
        assert_eq!(res.step, ONE_MINUTE);
        assert_eq!(res.breaks, ["-0.033333334", "-0.016666667"]);
    }

    #[test]
    fn twenty_minutes() {
        let res = select_step(0.0, 1.0, 3).unwrap();
        assert_eq!(res.step, 0.333_333_333);
        assert_eq!(res.breaks, ["0.333333333", "0.666666666", "0.999999999"]);
    }

    #[test]
    fn finest_step_for_tiny_interval() {
        let res = select_step(10.5, 10.5001, 2).unwrap();
        assert_eq!(res.step, FINEST_STEP);
        assert_eq!(res.breaks, ["10.500008400"]);
    }

    #[test]
    fn single_point_interval() {
        let res = select_step(5.0, 5.0, 3).unwrap();
        assert_eq!(res.step, FINEST_STEP);
        assert!(res.is_empty());
    }

    #[test]
    fn reversed_interval() {
        let res = select_step(10.0, -10.0, 3).unwrap();
        assert_eq!(res.step, FINEST_STEP);
        assert!(res.is_empty());
        assert_eq!(res.len(), 0);
    }

    #[test]
    fn no_negative_zero() {
        let res = select_step(-1.0, 1.0, 2).unwrap();
        assert_eq!(res.step, 1.0);
        assert_eq!(res.breaks, ["0", "1"]);
    }

    #[test]
    fn values_parsed_back() {
        let res = select_step(-10.0, 10.0, 3).unwrap();
        let values: Vec<f64> = res.values().collect();
        assert_eq!(values, [-5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    #[should_panic(expected = "ZeroDivisions")]
    fn zero_target() {
        let _r = select_step(0.0, 10.0, 0).unwrap();
    }

    #[test]
    #[should_panic(expected = "NonFiniteBound")]
    fn infinite_bound() {
        let _r = select_step(0.0, f64::INFINITY, 3).unwrap();
    }

    #[test]
    #[should_panic(expected = "NonFiniteBound")]
    fn nan_bound() {
        let _r = select_step(f64::NAN, 10.0, 3).unwrap();
    }

    #[test]
    #[should_panic(expected = "TooManyBreaks")]
    fn huge_interval() {
        let _r = select_step(-1e9, 1e9, 3).unwrap();
    }

    #[test]
    fn extreme_bounds_rejected_at_once() {
        for (min, max) in [(-1e15, 1e15), (-f64::MAX, f64::MAX), (0.0, 1e300)] {
            assert_eq!(
                select_step(min, max, 3),
                Err(InvalidArgument::TooManyBreaks)
            );
        }
    }

    #[test]
    fn several_world_widths_allowed() {
        let res = select_step(-540.0, 540.0, 3).unwrap();
        assert_eq!(res.step, 60.0);
        assert_eq!(res.len(), 18);
    }

    #[test]
    fn finest_step_with_many_divisions() {
        let res = select_step(0.0, 0.01, 1000).unwrap();
        assert_eq!(res.step, FINEST_STEP);
        assert_eq!(res.len(), 35);
    }

    #[test]
    fn nice_step_exact_match() {
        assert_eq!(nice_step(60.0), 60.0);
        assert_eq!(nice_step(59.999), 30.0);
        assert_eq!(nice_step(0.5), 0.5);
        assert_eq!(nice_step(f64::NAN), FINEST_STEP);
    }

    proptest! {
        #[test]
        fn prop_breaks_inside(min in -180.0..180.0f64, width in 0.0..360.0f64, target in 1..20u32) {
            let max = min + width;
            let res = select_step(min, max, target).unwrap();
            for value in res.values() {
                prop_assert!(min <= value && value <= max);
            }
        }

        #[test]
        fn prop_breaks_ascending(min in -180.0..180.0f64, width in 0.0..360.0f64, target in 1..20u32) {
            let res = select_step(min, min + width, target).unwrap();
            let values: Vec<f64> = res.values().collect();
            prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn prop_breaks_aligned(min in -180.0..180.0f64, width in 0.0..360.0f64, target in 1..20u32) {
            let res = select_step(min, min + width, target).unwrap();
            for value in res.values() {
                let multiple = value / res.step;
                prop_assert!((multiple - multiple.round()).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_step_grows_with_width(
            min in -180.0..180.0f64,
            width in 0.0..180.0f64,
            extra in 0.0..180.0f64,
            target in 1..20u32
        ) {
            let narrow = select_step(min, min + width, target).unwrap();
            let wide = select_step(min, min + width + extra, target).unwrap();
            prop_assert!(wide.step >= narrow.step);
        }

        #[test]
        fn prop_break_count_bounded(min in -180.0..180.0f64, width in 0.0..360.0f64, target in 1..20u32) {
            let res = select_step(min, min + width, target).unwrap();
            prop_assert!(res.len() as f64 <= max_breaks(target));
        }

        #[test]
        fn prop_idempotent(min in -180.0..180.0f64, width in 0.0..360.0f64, target in 1..20u32) {
            let first = select_step(min, min + width, target).unwrap();
            let second = select_step(min, min + width, target).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
