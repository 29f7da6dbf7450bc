//! Common utilities for integration tests

pub mod mock_models;
pub mod scenarios;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{CountingProbe, UniformSlab};
pub use scenarios::{retarded_plume, survey_grid, survey_plume};
pub use test_helpers::relative_error;
