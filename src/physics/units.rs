//! Length unit conversions for site data
//!
//! Hydrogeological survey data in North American reports is routinely given
//! in feet while the evaluator works in metres. These helpers make the
//! conversion explicit at the point where site data is transcribed into
//! scenario parameters, instead of leaving silent unit mismatches in the
//! numbers.

/// Metres per international foot (exact by definition).
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Convert a length in feet to metres.
///
/// # Example
///
/// ```rust
/// use plume_rs::physics::feet_to_meters;
///
/// let source_width = feet_to_meters(200.0);
/// assert!((source_width - 60.96).abs() < 1e-12);
/// ```
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Convert a length in metres to feet.
///
/// # Example
///
/// ```rust
/// use plume_rs::physics::meters_to_feet;
///
/// assert!((meters_to_feet(0.3048) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

// =================================================================================================
// Tests
// =================================================================================================
