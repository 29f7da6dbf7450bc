//! Mock concentration models for testing
//!
//! These models have trivially predictable readings, making them ideal
//! for validating the sampling and plotting pipeline independently of
//! the transport physics.

use plume_rs::physics::ConcentrationModel;
use std::cell::Cell;

// =================================================================================================
// Counting Probe: reading encodes the coordinates
// =================================================================================================

/// Probe that counts how often it is read
///
/// The reading encodes the coordinates as `1000 * x + y`, so alignment
/// bugs in the sampler show up as value mismatches while the call count
/// verifies each grid point is visited exactly once.
pub struct CountingProbe {
    calls: Cell<usize>,
}

impl CountingProbe {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    /// Number of readings taken so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Default for CountingProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcentrationModel for CountingProbe {
    fn concentration_at(&self, x: f64, y: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        1000.0 * x + y
    }

    fn source_concentration(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "Counting Probe"
    }
}

// =================================================================================================
// Uniform Slab: constant level over a finite reach
// =================================================================================================

/// Uniform slab: a constant `level` everywhere within `reach` of the
/// source, clean water beyond
///
/// Band membership of every grid point is known in advance, which makes
/// this the model of choice for map-grouping assertions.
pub struct UniformSlab {
    pub level: f64,
    pub reach: f64,
}

impl UniformSlab {
    pub fn new(level: f64, reach: f64) -> Self {
        Self { level, reach }
    }
}

impl ConcentrationModel for UniformSlab {
    fn concentration_at(&self, x: f64, _y: f64) -> f64 {
        if x > 0.0 && x <= self.reach {
            self.level
        } else {
            0.0
        }
    }

    fn source_concentration(&self) -> f64 {
        self.level
    }

    fn name(&self) -> &str {
        "Uniform Slab"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_probe_counts_reads() {
        let probe = CountingProbe::new();

        probe.concentration_at(1.0, 0.0);
        probe.concentration_at(2.0, -3.0);

        assert_eq!(probe.calls(), 2);
    }

    #[test]
    fn test_counting_probe_encodes_coordinates() {
        let probe = CountingProbe::new();
        assert_eq!(probe.concentration_at(5.0, -2.0), 4998.0);
    }

    #[test]
    fn test_uniform_slab_extent() {
        let slab = UniformSlab::new(50.0, 10.0);

        assert_eq!(slab.concentration_at(0.0, 0.0), 0.0);
        assert_eq!(slab.concentration_at(5.0, 12.0), 50.0);
        assert_eq!(slab.concentration_at(10.0, 0.0), 50.0);
        assert_eq!(slab.concentration_at(10.5, 0.0), 0.0);
    }
}
