//! plume-rs: Groundwater Contaminant Plume Evaluation
//!
//! An analytical toolkit for mapping dissolved contaminant plumes in
//! groundwater using the Domenico & Robbins (1985) closed-form solution.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! plume-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Survey**
//!    - Concentration models define the plume (what the water contains)
//!    - Sampling and output layers turn it into maps (how it is surveyed)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Scenario parameters validated at construction
//!    - Stable API (v0.1.0+)
//!
//! # Quick Start
//!
//! ```rust
//! use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
//! use plume_rs::output::{plot_plume_map, BandScale};
//! use plume_rs::physics::ConcentrationModel;
//! use plume_rs::sampling::{sample_field, AxisSpec, GridSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Describe the release scenario
//! let plume = DomenicoPlume::new(
//!     SourceGeometry::new(10.0, 5.0, 100.0),
//!     AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
//!     36_500.0, // 100 years
//! );
//!
//! // 2. Sample the plume on a survey grid
//! let grid = GridSpec::new(
//!     AxisSpec::new("x", 1.0, 100.0, 1.0),
//!     AxisSpec::new("y", -20.0, 20.0, 1.0),
//! );
//! let field = sample_field(&plume, &grid)?;
//!
//! // 3. Map it
//! let bands = BandScale::relative_to_source(plume.source_concentration());
//! let path = std::env::temp_dir().join("plume.png");
//! plot_plume_map(&field, &bands, path.to_str().unwrap(), None)?;
//!
//! // 4. Read any single point
//! println!("Fence line: {:.2} µg/L", plume.concentration_at(50.0, 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Model trait and unit conversions
//! - [`models`]: Analytical plume models
//! - [`sampling`]: Survey grids and field sampling
//! - [`output`]: Plume maps and profile plots
//! - [`cli`]: Interactive well query prompts

// Core modules
pub mod physics;

pub mod models;
pub mod sampling;

pub mod output;

pub mod cli;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use plume_rs::prelude::*;
    //! ```
    pub use crate::models::{AquiferProperties,
                            DomenicoPlume,
                            SourceGeometry};
    pub use crate::output::{plot_centerline_profile,
                            plot_plume_map,
                            BandScale,
                            PlotConfig};
    pub use crate::physics::ConcentrationModel;
    pub use crate::sampling::{sample_centerline,
                              sample_field,
                              AxisSpec,
                              ConcentrationField,
                              GridSpec};
}
