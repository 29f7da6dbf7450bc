//! Grid sampling of concentration models
//!
//! This module turns a pointwise [`ConcentrationModel`](crate::physics::ConcentrationModel)
//! into a dense field of readings over a plan-view survey grid.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHERE vs WHAT)
//!
//! 1. **Grid** ([`GridSpec`], [`AxisSpec`]) - WHERE to read
//!    - Downgradient axis crossed with a transverse axis
//!    - Evenly spaced, endpoints included
//!
//! 2. **Sampler** ([`sample_field`], [`sample_centerline`]) - the traversal
//!    - Visits every grid point exactly once, x-major
//!    - Rejects non-finite readings with a located diagnostic
//!
//! 3. **Field** ([`ConcentrationField`]) - WHAT was read
//!    - Dense `Array2<f64>` aligned with the grid axes
//!    - Feeds the plotting layer and summary reporting
//!
//! # Quick Start Example
//!
//! ```rust
//! use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
//! use plume_rs::sampling::{sample_field, AxisSpec, GridSpec};
//!
//! let plume = DomenicoPlume::new(
//!     SourceGeometry::new(10.0, 5.0, 100.0),
//!     AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
//!     36_500.0,
//! );
//!
//! let grid = GridSpec::new(
//!     AxisSpec::new("x", 1.0, 100.0, 1.0),
//!     AxisSpec::new("y", -20.0, 20.0, 1.0),
//! );
//!
//! let field = sample_field(&plume, &grid)?;
//! println!(
//!     "{} of {} readings above detection",
//!     field.detected_count(),
//!     field.len()
//! );
//! # Ok::<(), String>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod field;
pub mod grid;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use field::{sample_centerline, sample_field, ConcentrationField};
pub use grid::{AxisSpec, GridSpec};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate a single model reading for numerical issues
///
/// Checks that the reading is neither NaN nor infinite. Either would poison
/// the sampled field and every statistic or plot derived from it.
///
/// # Arguments
///
/// * `value` - Reading returned by the model
/// * `x` - Downgradient coordinate of the reading (for error reporting)
/// * `y` - Transverse coordinate of the reading (for error reporting)
///
/// # Returns
///
/// `Ok(())` if the reading is finite, `Err(msg)` with diagnostic
/// information otherwise
pub(crate) fn validate_reading(value: f64, x: f64, y: f64) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!(
            "NaN reading at (x = {}, y = {}). This indicates an invalid \
             parameter combination. Check dispersivities and elapsed time.",
            x, y
        ));
    }

    if value.is_infinite() {
        return Err(format!(
            "Infinite reading at (x = {}, y = {}). This indicates numerical \
             overflow in the model evaluation.",
            x, y
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
