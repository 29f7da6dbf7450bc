//! Field sampling: evaluate a model over a survey grid
//!
//! The sampler is the only place where a [`ConcentrationModel`] meets a
//! [`GridSpec`]. It walks the grid x-major, reads the model once per point
//! and stores the readings in a dense [`ndarray::Array2`] aligned with the
//! grid axes.

use crate::physics::ConcentrationModel;
use crate::sampling::grid::{AxisSpec, GridSpec};
use crate::sampling::validate_reading;
use ndarray::Array2;

// =================================================================================================
// Concentration Field
// =================================================================================================

/// Dense grid of concentration readings, aligned with the grid that
/// produced it
///
/// Axis 0 of the value array follows the grid's x axis, axis 1 its y axis,
/// so `values()[[i, j]]` is the reading at
/// `(grid.x.coordinate(i), grid.y.coordinate(j))`.
#[derive(Clone, Debug)]
pub struct ConcentrationField {
    /// Grid the readings were taken on
    grid: GridSpec,
    /// Readings, shape `(x points, y points)`
    values: Array2<f64>,
}

impl ConcentrationField {
    /// Grid the field was sampled on.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Raw readings, shape `(x points, y points)`.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Reading at grid index `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Total number of readings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A sampled field always carries at least one reading.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest reading in the field.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of readings above the detection floor.
    pub fn detected_count(&self) -> usize {
        self.values.iter().filter(|&&value| value > 0.0).count()
    }

    /// Iterate over `(x, y, concentration)` triples in x-major order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
    /// use plume_rs::sampling::{sample_field, AxisSpec, GridSpec};
    ///
    /// let plume = DomenicoPlume::new(
    ///     SourceGeometry::new(10.0, 5.0, 100.0),
    ///     AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
    ///     36_500.0,
    /// );
    /// let grid = GridSpec::new(
    ///     AxisSpec::new("x", 1.0, 100.0, 1.0),
    ///     AxisSpec::new("y", -20.0, 20.0, 1.0),
    /// );
    ///
    /// let field = sample_field(&plume, &grid)?;
    /// assert_eq!(field.iter_points().count(), 4100);
    /// # Ok::<(), String>(())
    /// ```
    pub fn iter_points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.values.indexed_iter().map(move |((i, j), &value)| {
            (
                self.grid.x.coordinate(i),
                self.grid.y.coordinate(j),
                value,
            )
        })
    }
}

// =================================================================================================
// Sampling Functions
// =================================================================================================

/// Evaluate `model` at every point of `grid` and collect the readings.
///
/// The grid is walked x-major: all transverse offsets of the first
/// downgradient distance, then the next distance, and so on. Each grid
/// point is read exactly once.
///
/// # Arguments
///
/// * `model` - Concentration model to sample
/// * `grid` - Survey grid to sample on
///
/// # Returns
///
/// The sampled [`ConcentrationField`], or `Err(msg)` when the model
/// produces a non-finite reading.
pub fn sample_field<M>(model: &M, grid: &GridSpec) -> Result<ConcentrationField, String>
where
    M: ConcentrationModel + ?Sized,
{
    let (nx, ny) = grid.shape();
    let mut values = Array2::zeros((nx, ny));

    for (i, x) in grid.x.values().enumerate() {
        for (j, y) in grid.y.values().enumerate() {
            let reading = model.concentration_at(x, y);
            validate_reading(reading, x, y)?;
            values[[i, j]] = reading;
        }
    }

    Ok(ConcentrationField {
        grid: grid.clone(),
        values,
    })
}

/// Evaluate `model` along the plume centerline (`y = 0`).
///
/// # Arguments
///
/// * `model` - Concentration model to sample
/// * `axis` - Downgradient distances to read at
///
/// # Returns
///
/// `(distances, readings)` as parallel vectors, or `Err(msg)` when the
/// model produces a non-finite reading.
pub fn sample_centerline<M>(model: &M, axis: &AxisSpec) -> Result<(Vec<f64>, Vec<f64>), String>
where
    M: ConcentrationModel + ?Sized,
{
    let distances: Vec<f64> = axis.values().collect();
    let mut readings = Vec::with_capacity(distances.len());

    for &x in &distances {
        let reading = model.concentration_at(x, 0.0);
        validate_reading(reading, x, 0.0)?;
        readings.push(reading);
    }

    Ok((distances, readings))
}

// =================================================================================================
// Tests
// =================================================================================================
