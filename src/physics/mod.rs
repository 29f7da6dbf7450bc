//! Physics layer: the model seam and unit helpers
//!
//! This module defines what a concentration model *is*; concrete
//! closed-form solutions live in [`models`](crate::models).
//!
//! # Core Concepts
//!
//! - **Concentration Model**: a pure function from a plan-view coordinate
//!   to a concentration value
//! - **Unit helpers**: explicit feet↔metre conversion when transcribing
//!   surveyed site data
//!
//! # Architecture
//!
//! Models are **separate from sampling and presentation**:
//! - The model provides the **equation** (physics)
//! - The sampling layer provides the **survey grid** (where to evaluate)
//! - The output layer provides the **rendering** (how to show it)
//!
//! This separation allows:
//! - The same grid and plots for different analytical solutions
//! - Testing the equation against published values without any plotting
//!
//! # Example
//!
//! ```rust
//! use plume_rs::physics::ConcentrationModel;
//! use plume_rs::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
//!
//! let source = SourceGeometry::new(10.0, 5.0, 100.0);
//! let aquifer = AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0);
//! let plume = DomenicoPlume::new(source, aquifer, 36_500.0);
//!
//! // Evaluate the model at one downgradient point
//! let reading = plume.concentration_at(50.0, 0.0);
//! assert!(reading > 0.0 && reading < plume.source_concentration());
//! ```

// module declaration
pub mod traits;
pub mod units;

// re-export commonly used items for convenience
pub use traits::ConcentrationModel;
pub use units::{feet_to_meters, meters_to_feet, METERS_PER_FOOT};
