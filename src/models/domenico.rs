//! Domenico & Robbins (1985) analytical plume model
//!
//! Closed-form solution for the steady continuous release of a dissolved
//! contaminant from a finite rectangular source into a uniform groundwater
//! flow field. The concentration at a plan-view point is the product of
//! three spreading terms, one per axis, scaled by the source concentration.
//!
//! # Key Features
//!
//! - **Pure evaluation**: no discretization, no time stepping; every point
//!   is computed independently from the published formula
//! - **Total function**: `x <= 0` (at or upgradient of the source plane)
//!   evaluates to zero instead of failing on the singular transverse terms
//! - **Detection floor**: readings at or below [`DETECTION_FLOOR`] report
//!   as exactly zero, the way a lab report would
//!
//! # Example
//!
//! ```rust
//! use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
//! use plume_rs::physics::ConcentrationModel;
//!
//! // 10 m wide, 5 m deep source leaching at 100 µg/L
//! let source = SourceGeometry::new(10.0, 5.0, 100.0);
//!
//! // Sandy aquifer, 0.1 m/d seepage velocity, no sorption
//! let aquifer = AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0);
//!
//! // One century of release
//! let plume = DomenicoPlume::new(source, aquifer, 36_500.0);
//!
//! let fence_line = plume.concentration_at(50.0, 0.0);
//! assert!(fence_line > 0.0 && fence_line < 100.0);
//! ```

use crate::physics::ConcentrationModel;
use libm::{erf, erfc};

/// First-order decay rate of the dissolved contaminant.
///
/// Decay is not modeled: the rate stays pinned at zero, which collapses the
/// exponential factor of the longitudinal term to 1. The factor is still
/// evaluated from this constant so the implemented formula keeps the shape
/// of the published solution.
const DECAY_RATE: f64 = 0.0;

/// Concentration at or below which a reading reports as zero.
///
/// Same units as the source concentration. A computed value this small is
/// below any realistic detection limit and would otherwise clutter the
/// field map with background noise.
pub const DETECTION_FLOOR: f64 = 0.01;

// =================================================================================================
// Parameter Structs
// =================================================================================================

/// Geometry and strength of the contaminant source zone
///
/// The source is a vertical rectangle centered on the plume centerline
/// (`y = 0`), perpendicular to the flow direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceGeometry {
    /// Source width Y transverse to flow \[m\]
    pub width: f64,
    /// Source depth Z below the water table \[m\]
    pub depth: f64,
    /// Source concentration C0 \[µg/L\]
    pub concentration: f64,
}

impl SourceGeometry {
    /// Create a source zone description.
    ///
    /// # Arguments
    ///
    /// * `width` - Source width Y \[m\]
    /// * `depth` - Source depth Z \[m\]
    /// * `concentration` - Source concentration C0 \[µg/L\]
    ///
    /// # Panics
    ///
    /// Panics when any argument is not strictly positive.
    pub fn new(width: f64, depth: f64, concentration: f64) -> Self {
        assert!(width > 0.0, "Source width must be positive, got {}", width);
        assert!(depth > 0.0, "Source depth must be positive, got {}", depth);
        assert!(
            concentration > 0.0,
            "Source concentration must be positive, got {}",
            concentration
        );

        Self {
            width,
            depth,
            concentration,
        }
    }
}

/// Transport properties of the aquifer material
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AquiferProperties {
    /// Seepage velocity v of the groundwater \[m/d\]
    pub seepage_velocity: f64,
    /// Longitudinal dispersivity αx \[m\]
    pub dispersivity_x: f64,
    /// Transverse horizontal dispersivity αy \[m\]
    pub dispersivity_y: f64,
    /// Transverse vertical dispersivity αz \[m\]
    pub dispersivity_z: f64,
    /// Retardation factor R (sorption), 1 for a conservative solute
    pub retardation: f64,
}

impl AquiferProperties {
    /// Create an aquifer description.
    ///
    /// # Arguments
    ///
    /// * `seepage_velocity` - Groundwater seepage velocity v \[m/d\]
    /// * `dispersivity_x` - Longitudinal dispersivity αx \[m\]
    /// * `dispersivity_y` - Transverse horizontal dispersivity αy \[m\]
    /// * `dispersivity_z` - Transverse vertical dispersivity αz \[m\]
    /// * `retardation` - Retardation factor R, at least 1
    ///
    /// # Panics
    ///
    /// Panics when the velocity or a dispersivity is not strictly positive,
    /// or when `retardation < 1.0`.
    pub fn new(
        seepage_velocity: f64,
        dispersivity_x: f64,
        dispersivity_y: f64,
        dispersivity_z: f64,
        retardation: f64,
    ) -> Self {
        assert!(
            seepage_velocity > 0.0,
            "Seepage velocity must be positive, got {}",
            seepage_velocity
        );
        assert!(
            dispersivity_x > 0.0,
            "Longitudinal dispersivity must be positive, got {}",
            dispersivity_x
        );
        assert!(
            dispersivity_y > 0.0,
            "Transverse dispersivity must be positive, got {}",
            dispersivity_y
        );
        assert!(
            dispersivity_z > 0.0,
            "Vertical dispersivity must be positive, got {}",
            dispersivity_z
        );
        assert!(
            retardation >= 1.0,
            "Retardation factor must be at least 1, got {}",
            retardation
        );

        Self {
            seepage_velocity,
            dispersivity_x,
            dispersivity_y,
            dispersivity_z,
            retardation,
        }
    }
}

// =================================================================================================
// Model
// =================================================================================================

/// Domenico-Robbins plan-view plume evaluator
///
/// Evaluates
///
/// $$C(x, y) = \frac{C_0}{4} \cdot F_x(x) \cdot F_y(x, y) \cdot F_z(x)$$
///
/// on the horizontal plane through the source centre, where
///
/// - $F_x$ is the longitudinal term: an exponential decay-with-distance
///   factor (unity here, zero decay) times
///   $\mathrm{erfc}\!\left[(x - v_c t)/(2\sqrt{\alpha_x v_c t})\right]$
///   with $v_c = v / R$ the retarded contaminant velocity,
/// - $F_y$ is the transverse horizontal term:
///   $\mathrm{erf}\!\left[\frac{y + Y/2}{2\sqrt{\alpha_y x}}\right] -
///    \mathrm{erf}\!\left[\frac{y - Y/2}{2\sqrt{\alpha_y x}}\right]$,
/// - $F_z$ is the transverse vertical term: the same difference over
///   $\pm Z/2$ with $\alpha_z$, evaluated on the source-centre plane.
#[derive(Clone, Debug)]
pub struct DomenicoPlume {
    // ==================== Scenario Parameters ====================
    /// Source zone geometry and strength
    source: SourceGeometry,
    /// Aquifer transport properties
    aquifer: AquiferProperties,
    /// Elapsed release time t \[d\]
    elapsed_time: f64,

    // ==================== Derived Quantities ====================
    /// Distance the plume front has travelled, v_c * t \[m\]
    travel: f64,
    /// Longitudinal spreading width 2 * sqrt(αx * v_c * t) \[m\]
    spread_x: f64,
}

impl DomenicoPlume {
    /// Create a plume evaluator for a release of duration `elapsed_time`.
    ///
    /// # Arguments
    ///
    /// * `source` - Source zone geometry and concentration
    /// * `aquifer` - Aquifer transport properties
    /// * `elapsed_time` - Time since the release began \[d\]
    ///
    /// # Panics
    ///
    /// Panics when `elapsed_time` is not strictly positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
    ///
    /// let plume = DomenicoPlume::new(
    ///     SourceGeometry::new(10.0, 5.0, 100.0),
    ///     AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
    ///     36_500.0,
    /// );
    /// assert!((plume.travel_distance() - 3650.0).abs() < 1e-9);
    /// ```
    pub fn new(source: SourceGeometry, aquifer: AquiferProperties, elapsed_time: f64) -> Self {
        assert!(
            elapsed_time > 0.0,
            "Elapsed time must be positive, got {}",
            elapsed_time
        );

        let travel = (aquifer.seepage_velocity / aquifer.retardation) * elapsed_time;
        let spread_x = 2.0 * (aquifer.dispersivity_x * travel).sqrt();

        Self {
            source,
            aquifer,
            elapsed_time,
            travel,
            spread_x,
        }
    }

    /// Source zone parameters.
    pub fn source(&self) -> &SourceGeometry {
        &self.source
    }

    /// Aquifer transport parameters.
    pub fn aquifer(&self) -> &AquiferProperties {
        &self.aquifer
    }

    /// Elapsed release time \[d\].
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Distance the plume front has travelled since the release began \[m\].
    pub fn travel_distance(&self) -> f64 {
        self.travel
    }

    /// Concentration on the plume centerline at distance `x` \[µg/L\].
    pub fn centerline(&self, x: f64) -> f64 {
        self.concentration_at(x, 0.0)
    }

    #[inline]
    fn retarded_velocity(&self) -> f64 {
        self.aquifer.seepage_velocity / self.aquifer.retardation
    }

    /// Longitudinal term: exponential factor times erfc travel-front factor.
    ///
    /// With the decay rate pinned at zero, gamma is 1 and the exponential
    /// factor is exactly 1; the erfc argument reduces to the classic
    /// (x - v_c t) / (2 sqrt(αx v_c t)).
    #[inline]
    fn longitudinal_term(&self, x: f64) -> f64 {
        let gamma = (1.0
            + 4.0 * DECAY_RATE * self.aquifer.dispersivity_x / self.retarded_velocity())
        .sqrt();
        let exponential = ((x / (2.0 * self.aquifer.dispersivity_x)) * (1.0 - gamma)).exp();

        exponential * erfc((x - gamma * self.travel) / self.spread_x)
    }

    /// Transverse horizontal term: erf difference across the source width.
    #[inline]
    fn transverse_term(&self, x: f64, y: f64) -> f64 {
        let half_width = 0.5 * self.source.width;
        let denom = 2.0 * (self.aquifer.dispersivity_y * x).sqrt();

        erf((y + half_width) / denom) - erf((y - half_width) / denom)
    }

    /// Transverse vertical term: erf difference across the source depth,
    /// evaluated on the plane through the source centre.
    #[inline]
    fn vertical_term(&self, x: f64) -> f64 {
        let half_depth = 0.5 * self.source.depth;
        let denom = 2.0 * (self.aquifer.dispersivity_z * x).sqrt();

        erf(half_depth / denom) - erf(-half_depth / denom)
    }
}

impl ConcentrationModel for DomenicoPlume {
    fn concentration_at(&self, x: f64, y: f64) -> f64 {
        // At or upgradient of the source plane the transverse denominators
        // vanish; the formula only holds for x > 0.
        if x <= 0.0 {
            return 0.0;
        }

        let concentration = 0.25
            * self.source.concentration
            * self.longitudinal_term(x)
            * self.transverse_term(x, y)
            * self.vertical_term(x);

        if concentration <= DETECTION_FLOOR {
            0.0
        } else {
            concentration
        }
    }

    fn source_concentration(&self) -> f64 {
        self.source.concentration
    }

    fn name(&self) -> &str {
        "Domenico-Robbins analytical plume"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Closed-form solution for a continuous finite planar source in \
             uniform groundwater flow, evaluated on the plane through the \
             source centre. First-order decay is not modeled.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
