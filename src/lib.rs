//! Graticule: evenly spaced meridians and parallels for a map viewport.
//!
//! For the visible bounds, a "nice" angular step (whole degrees, arc minutes
//! or arc seconds) is selected on each axis, the breaks aligned to that step
//! are generated and labelled either in decimal degrees or in the
//! Degree-Minute-Second notation with the `N`/`S`/`E`/`W` suffix.
//!
//! ```
//! # use graticule::{format_coordinate, select_step, AxisKind};
//! let lng = select_step(120.01, 120.05, 2).unwrap();
//! let labels: Vec<_> = lng
//!     .values()
//!     .map(|value| format_coordinate(value, lng.step, AxisKind::Longitude))
//!     .collect();
//! assert_eq!(labels, ["120°01′ E", "120°02′ E"]);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// the counts and the digits are small non-negative numbers
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use graticule_types::{
    AxisKind, Bounds, Direction, InvalidArgument, ParseCoordinateError, ParseDirectionError,
};

pub use self::{
    format::{format_coordinate, CoordinateLabel, Granularity},
    graticule::{AxisLines, Graticule, GraticuleOptions, GridLine, Tick, ToPixel},
    parse::parse_coordinate,
    step::{select_step, StepResult},
};

pub mod format;
mod graticule;
mod parse;
pub mod step;
mod utils;

pub use utils::decimal_places;
