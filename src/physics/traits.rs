//! Core trait for analytical concentration models
//!
//! A concentration model is a pure function from a plan-view coordinate
//! (x downgradient, y transverse) to a contaminant concentration. Closed-form
//! solutions such as [`DomenicoPlume`](crate::models::DomenicoPlume) implement
//! this trait; the sampling and presentation layers only ever see the trait.
//!
//! # Architecture
//!
//! The model is **separate from sampling and plotting**:
//! - The model provides the **equation** (physics)
//! - [`sampling`](crate::sampling) decides **where** to evaluate it
//! - [`output`](crate::output) decides **how** to show the result
//!
//! This separation allows the same survey grid and the same plot functions
//! to work with any analytical solution.

/// Analytical plan-view concentration model
///
/// Implementors compute the contaminant concentration at a single
/// coordinate. The function must be total: any finite `(x, y)` pair is a
/// valid argument, including points outside the physically meaningful
/// domain, which yield `0.0` rather than an error.
///
/// # Coordinate Convention
///
/// - `x` - distance downgradient from the source along the flow
///   direction. `x <= 0.0` is upgradient of (or at) the source plane and
///   evaluates to `0.0`.
/// - `y` - transverse offset from the plume centerline; the source is
///   centered at `y = 0`.
///
/// Both coordinates and the returned concentration carry whatever units
/// the model's parameters were given in (typically metres and µg/L).
///
/// # Example
///
/// ```rust
/// use plume_rs::physics::ConcentrationModel;
///
/// struct UniformSlab {
///     level: f64,
/// }
///
/// impl ConcentrationModel for UniformSlab {
///     fn concentration_at(&self, x: f64, _y: f64) -> f64 {
///         if x > 0.0 { self.level } else { 0.0 }
///     }
///
///     fn source_concentration(&self) -> f64 {
///         self.level
///     }
///
///     fn name(&self) -> &str {
///         "Uniform Slab"
///     }
/// }
///
/// let model = UniformSlab { level: 50.0 };
/// assert_eq!(model.concentration_at(10.0, 3.0), 50.0);
/// assert_eq!(model.concentration_at(-1.0, 0.0), 0.0);
/// ```
pub trait ConcentrationModel {
    /// Concentration at the plan-view coordinate `(x, y)`.
    ///
    /// Must return a non-negative finite value for every finite input.
    fn concentration_at(&self, x: f64, y: f64) -> f64;

    /// The source concentration C0 that readings are scaled against.
    ///
    /// Presentation uses this to build relative band scales.
    fn source_concentration(&self) -> f64;

    /// Human-readable model name (used in plot metadata and reports).
    fn name(&self) -> &str;

    /// Optional longer description of the model and its assumptions.
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal mock: level C0 inside a rectangle, zero outside.
    struct BoxedPlume {
        c0: f64,
        reach: f64,
        half_width: f64,
    }

    impl ConcentrationModel for BoxedPlume {
        fn concentration_at(&self, x: f64, y: f64) -> f64 {
            if x > 0.0 && x <= self.reach && y.abs() <= self.half_width {
                self.c0
            } else {
                0.0
            }
        }

        fn source_concentration(&self) -> f64 {
            self.c0
        }

        fn name(&self) -> &str {
            "Boxed Plume"
        }

        fn description(&self) -> Option<&str> {
            Some("Constant concentration inside a rectangular footprint")
        }
    }

    #[test]
    fn test_mock_model_inside_and_outside() {
        let model = BoxedPlume {
            c0: 100.0,
            reach: 50.0,
            half_width: 10.0,
        };

        assert_eq!(model.concentration_at(25.0, 0.0), 100.0);
        assert_eq!(model.concentration_at(25.0, 10.0), 100.0);
        assert_eq!(model.concentration_at(25.0, 10.1), 0.0);
        assert_eq!(model.concentration_at(51.0, 0.0), 0.0);
    }

    #[test]
    fn test_mock_model_is_total_at_and_behind_source() {
        let model = BoxedPlume {
            c0: 100.0,
            reach: 50.0,
            half_width: 10.0,
        };

        assert_eq!(model.concentration_at(0.0, 0.0), 0.0);
        assert_eq!(model.concentration_at(-100.0, 0.0), 0.0);
    }

    #[test]
    fn test_trait_object_usage() {
        let model: Box<dyn ConcentrationModel> = Box::new(BoxedPlume {
            c0: 42.0,
            reach: 1.0,
            half_width: 1.0,
        });

        assert_eq!(model.source_concentration(), 42.0);
        assert_eq!(model.name(), "Boxed Plume");
        assert!(model.description().is_some());
    }
}
