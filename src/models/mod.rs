//! Contaminant transport models
//!
//! All models implement the [`ConcentrationModel`](crate::physics::ConcentrationModel)
//! trait. The sampling layer calls `concentration_at` once per grid point; models
//! are responsible for the transport physics, the sampler for the traversal.
//!
//! # Available Models
//!
//! ## [`DomenicoPlume`] - continuous finite planar source
//!
//! The Domenico & Robbins (1985) closed-form solution for a dissolved plume
//! spreading from a rectangular source zone under uniform groundwater flow.
//! Parameters split into [`SourceGeometry`] (what is leaking) and
//! [`AquiferProperties`] (what it is leaking into).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod domenico;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use domenico::{AquiferProperties, DomenicoPlume, SourceGeometry, DETECTION_FLOOR};
