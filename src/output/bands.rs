//! Concentration bands for map coloring
//!
//! A [`BandScale`] splits the positive concentration range into ordered
//! bands. Band `k` covers `[edges[k], edges[k + 1])`; the hottest band is
//! open-ended. Readings below the lowest edge belong to no band and are
//! left off the map entirely, so clean water stays background-colored.

// =================================================================================================
// Band Scale
// =================================================================================================

/// Ascending concentration thresholds classifying readings into bands
///
/// # Example
///
/// ```rust
/// use plume_rs::output::BandScale;
///
/// // 10% / 30% / 50% / 90% of a 100 µg/L source
/// let scale = BandScale::relative_to_source(100.0);
///
/// assert_eq!(scale.band_of(5.0), None);       // clean, not drawn
/// assert_eq!(scale.band_of(12.0), Some(0));   // coldest band
/// assert_eq!(scale.band_of(95.0), Some(3));   // hottest band
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    /// Lower edge of each band, strictly ascending
    edges: Vec<f64>,
}

impl BandScale {
    /// Create a scale from explicit band edges.
    ///
    /// # Arguments
    ///
    /// * `edges` - Lower edge of each band, in ascending order
    ///
    /// # Panics
    ///
    /// Panics when `edges` is empty, contains a non-positive value or is
    /// not strictly ascending.
    pub fn new(edges: Vec<f64>) -> Self {
        assert!(!edges.is_empty(), "Band scale needs at least one edge");
        for pair in edges.windows(2) {
            assert!(
                pair[0] < pair[1],
                "Band edges must be strictly ascending, got {} before {}",
                pair[0],
                pair[1]
            );
        }
        assert!(
            edges[0] > 0.0,
            "Band edges must be positive, got {}",
            edges[0]
        );

        Self { edges }
    }

    /// Standard survey scale: bands at 10%, 30%, 50% and 90% of the
    /// source concentration.
    ///
    /// # Panics
    ///
    /// Panics when `source_concentration` is not strictly positive.
    pub fn relative_to_source(source_concentration: f64) -> Self {
        assert!(
            source_concentration > 0.0,
            "Source concentration must be positive, got {}",
            source_concentration
        );

        Self::new(
            [0.1, 0.3, 0.5, 0.9]
                .iter()
                .map(|fraction| fraction * source_concentration)
                .collect(),
        )
    }

    /// Lower edge of each band, ascending.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// A scale always carries at least one band.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Band index of a reading, coldest band first.
    ///
    /// Returns `None` for readings below the lowest edge. A reading equal
    /// to an edge belongs to the band that edge opens.
    pub fn band_of(&self, value: f64) -> Option<usize> {
        let above = self.edges.partition_point(|&edge| edge <= value);
        if above == 0 {
            None
        } else {
            Some(above - 1)
        }
    }

    /// Human-readable range label for band `band`, for plot legends.
    ///
    /// # Panics
    ///
    /// Panics when `band` is out of range.
    pub fn label(&self, band: usize) -> String {
        assert!(
            band < self.edges.len(),
            "Band index {} out of range for {} bands",
            band,
            self.edges.len()
        );

        if band + 1 < self.edges.len() {
            format!("{} - {} µg/L", self.edges[band], self.edges[band + 1])
        } else {
            format!("> {} µg/L", self.edges[band])
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
