//! The grid lines of both axes computed for a single redraw of the viewport.

use graticule_types::{AxisKind, Bounds, InvalidArgument};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{format::format_coordinate, step::select_step};

/// The density of the grid along each of the axes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraticuleOptions {
    /// Approximate number of divisions between the west and the east edges
    pub lng_divisions: u32,
    /// Approximate number of divisions between the south and the north edges
    pub lat_divisions: u32,
}

impl Default for GraticuleOptions {
    fn default() -> Self {
        Self {
            lng_divisions: 3,
            lat_divisions: 2,
        }
    }
}

impl GraticuleOptions {
    /// Target number of divisions for the axis
    pub const fn divisions(&self, axis: AxisKind) -> u32 {
        match axis {
            AxisKind::Longitude => self.lng_divisions,
            AxisKind::Latitude => self.lat_divisions,
        }
    }
}

/// A single meridian or parallel
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// Signed value in degrees
    pub value: f64,
    /// The break as generated by the step selection
    pub text: String,
    /// Human-readable label
    pub label: String,
}

/// All the lines of a single axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLines {
    /// Meridians or parallels
    pub axis: AxisKind,
    /// The distance between the adjacent lines in degrees
    pub step: f64,
    /// Ordered from west to east or from south to north
    pub lines: Vec<GridLine>,
}

impl AxisLines {
    fn compute(bounds: &Bounds, axis: AxisKind, divisions: u32) -> Result<Self, InvalidArgument> {
        let (min, max) = bounds.interval(axis);
        let res = select_step(min, max, divisions)?;
        let step = res.step;

        let lines = res
            .breaks
            .into_iter()
            .filter_map(|text| {
                let value = text.parse().ok()?;
                let label = format_coordinate(value, step, axis);
                Some(GridLine { value, text, label })
            })
            .collect();

        Ok(Self { axis, step, lines })
    }
}

/// Projection of the geographic coordinates onto the pixels of the map container
pub trait ToPixel {
    /// Pixel `(x, y)` of the point
    fn to_pixel(&self, lat: f64, lng: f64) -> (f64, f64);
}

impl<F> ToPixel for F
where
    F: Fn(f64, f64) -> (f64, f64),
{
    fn to_pixel(&self, lat: f64, lng: f64) -> (f64, f64) {
        self(lat, lng)
    }
}

/// Where to draw the tick and the label of a grid line along the viewport edge
#[derive(Debug, Clone, PartialEq)]
pub struct Tick<'a> {
    /// The axis of the grid line
    pub axis: AxisKind,
    /// `x` pixel for the meridians, `y` pixel for the parallels
    pub offset: f64,
    /// The label of the line
    pub label: &'a str,
}

/// Meridians and parallels visible in the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Graticule {
    bounds: Bounds,
    /// Vertical lines
    pub longitudes: AxisLines,
    /// Horizontal lines
    pub latitudes: AxisLines,
}

impl Graticule {
    /// Compute the lines of both axes from scratch.
    ///
    /// # Errors
    /// When any of the target divisions is zero or the bounds are not finite.
    ///
    /// ```
    /// # use graticule::{AxisKind, Bounds, Graticule, GraticuleOptions};
    /// let bounds = Bounds::new(-10.0, 10.0, 40.0, 50.0);
    /// let grid = Graticule::compute(&bounds, &GraticuleOptions::default()).unwrap();
    /// let labels: Vec<_> = grid.longitudes.lines.iter().map(|l| l.label.as_str()).collect();
    /// assert_eq!(labels, ["5° W", "0°", "5° E", "10° E"]);
    /// ```
    pub fn compute(bounds: &Bounds, options: &GraticuleOptions) -> Result<Self, InvalidArgument> {
        let longitudes = AxisLines::compute(
            bounds,
            AxisKind::Longitude,
            options.divisions(AxisKind::Longitude),
        )?;
        let latitudes = AxisLines::compute(
            bounds,
            AxisKind::Latitude,
            options.divisions(AxisKind::Latitude),
        )?;

        debug!(
            "Graticule for {:?}: {} meridians, {} parallels",
            bounds,
            longitudes.lines.len(),
            latitudes.lines.len()
        );

        Ok(Self {
            bounds: *bounds,
            longitudes,
            latitudes,
        })
    }

    /// The viewport the lines were computed for
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Place every line on the viewport edges.
    ///
    /// The meridians are projected on the north edge and the parallels
    /// on the west edge. Mirroring the ticks onto the south and east edges
    /// and shifting them inwards or outwards is up to the renderer.
    pub fn ticks<P: ToPixel>(&self, projection: &P) -> Vec<Tick<'_>> {
        let meridians = self.longitudes.lines.iter().map(|line| {
            let (x, _) = projection.to_pixel(self.bounds.north, line.value);
            Tick {
                axis: AxisKind::Longitude,
                offset: x,
                label: &line.label,
            }
        });

        let parallels = self.latitudes.lines.iter().map(|line| {
            let (_, y) = projection.to_pixel(line.value, self.bounds.west);
            Tick {
                axis: AxisKind::Latitude,
                offset: y,
                label: &line.label,
            }
        });

        meridians.chain(parallels).collect()
    }
}
