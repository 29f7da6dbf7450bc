//! Regular sampling grids over the plume domain
//!
//! # Design Philosophy
//!
//! A survey grid is two independent axes, each described by a start, an end
//! and a step. Nothing here knows about concentrations: the grid only says
//! WHERE to read, the model says WHAT is read there.

use std::fmt;

// =================================================================================================
// Axis Specification
// =================================================================================================

/// One sampled axis: evenly spaced coordinates from `start` towards `end`
///
/// The last sample is the largest `start + k * step` that does not exceed
/// `end` (a small tolerance absorbs floating-point drift, so an axis meant
/// to land exactly on `end` does).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Axis name used in diagnostics and plot labels
    pub name: String,
    /// First sampled coordinate
    pub start: f64,
    /// Upper bound of the sampled range (inclusive)
    pub end: f64,
    /// Spacing between consecutive samples
    pub step: f64,
}

impl AxisSpec {
    /// Create an axis specification.
    ///
    /// # Arguments
    ///
    /// * `name` - Axis name (e.g. `"x"`, `"y"`)
    /// * `start` - First sampled coordinate
    /// * `end` - Upper bound of the range, inclusive
    /// * `step` - Spacing between samples
    ///
    /// # Panics
    ///
    /// Panics when `step` is not strictly positive or when `end < start`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plume_rs::sampling::AxisSpec;
    ///
    /// let x = AxisSpec::new("x", 1.0, 100.0, 1.0);
    /// assert_eq!(x.points(), 100);
    ///
    /// let y = AxisSpec::new("y", -20.0, 20.0, 1.0);
    /// assert_eq!(y.points(), 41);
    /// ```
    pub fn new(name: impl Into<String>, start: f64, end: f64, step: f64) -> Self {
        assert!(step > 0.0, "Axis step must be positive, got {}", step);
        assert!(
            end >= start,
            "Axis end must not precede start, got [{}, {}]",
            start,
            end
        );

        Self {
            name: name.into(),
            start,
            end,
            step,
        }
    }

    /// Number of sample points on the axis, both endpoints included.
    pub fn points(&self) -> usize {
        // The tolerance keeps ranges like [-20, 20] step 1 at exactly 41
        // points when the division lands a hair under an integer.
        ((self.end - self.start) / self.step + 1e-9).floor() as usize + 1
    }

    /// Coordinate of sample `index`.
    pub fn coordinate(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Iterator over all sample coordinates, in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points()).map(move |index| self.coordinate(index))
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: [{}, {}] step {} ({} points)",
            self.name,
            self.start,
            self.end,
            self.step,
            self.points()
        )
    }
}

// =================================================================================================
// Grid Specification
// =================================================================================================

/// Plan-view survey grid: a downgradient axis crossed with a transverse axis
///
/// # Examples
///
/// ```rust
/// use plume_rs::sampling::{AxisSpec, GridSpec};
///
/// // Standard site survey: 1-100 m downgradient, ±20 m off axis
/// let grid = GridSpec::new(
///     AxisSpec::new("x", 1.0, 100.0, 1.0),
///     AxisSpec::new("y", -20.0, 20.0, 1.0),
/// );
///
/// assert_eq!(grid.shape(), (100, 41));
/// assert_eq!(grid.len(), 4100);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Downgradient axis (distance from the source plane)
    pub x: AxisSpec,
    /// Transverse axis (offset from the plume centerline)
    pub y: AxisSpec,
}

impl GridSpec {
    /// Combine two axes into a grid.
    pub fn new(x: AxisSpec, y: AxisSpec) -> Self {
        Self { x, y }
    }

    /// Number of points along each axis, `(x, y)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.x.points(), self.y.points())
    }

    /// Total number of sample points in the grid.
    pub fn len(&self) -> usize {
        self.x.points() * self.y.points()
    }

    /// A grid always carries at least one point per axis.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} × {}", self.x, self.y)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
