//! Shared release scenarios for integration tests

use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
use plume_rs::sampling::{AxisSpec, GridSpec};

/// Reference sandy-aquifer scenario used across the integration suite:
/// C0 = 100 µg/L, Y × Z = 10 m × 5 m, v = 0.1 m/d, αx/αy/αz = 10/1/0.1 m,
/// conservative solute, 100 years of release.
pub fn survey_plume() -> DomenicoPlume {
    DomenicoPlume::new(
        SourceGeometry::new(10.0, 5.0, 100.0),
        AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
        36_500.0,
    )
}

/// Same scenario as [`survey_plume`] with a custom retardation factor.
pub fn retarded_plume(retardation: f64) -> DomenicoPlume {
    DomenicoPlume::new(
        SourceGeometry::new(10.0, 5.0, 100.0),
        AquiferProperties::new(0.1, 10.0, 1.0, 0.1, retardation),
        36_500.0,
    )
}

/// Standard survey grid: 1-100 m downgradient, ±20 m off axis, 1 m steps.
pub fn survey_grid() -> GridSpec {
    GridSpec::new(
        AxisSpec::new("x", 1.0, 100.0, 1.0),
        AxisSpec::new("y", -20.0, 20.0, 1.0),
    )
}
