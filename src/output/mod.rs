//! Output module for survey results
//!
//! This module renders sampled concentration fields for human interpretation:
//! - **Plume map**: plan-view banded scatter of the whole field
//! - **Profiles**: concentration-vs-distance curves along the centerline
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs        ← This file
//! ├── config.rs     ← Shared plot configuration
//! ├── bands.rs      ← Concentration band scale
//! ├── plume_map.rs  ← Plan-view banded scatter map
//! └── profile.rs    ← Centerline profile curves
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use plume_rs::output::{plot_plume_map, BandScale};
//!
//! let bands = BandScale::relative_to_source(plume.source_concentration());
//! plot_plume_map(&field, &bands, "plume.png", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! Plot functions take plain data (a sampled field or `&[f64]` slices), an
//! output path and an optional [`PlotConfig`]. The file extension selects
//! the backend: `.svg` renders vector graphics, anything else a bitmap.

pub mod bands;
pub mod config;
pub mod plume_map;
pub mod profile;

// Re-export commonly used items for convenience
pub use bands::BandScale;
pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use plume_map::plot_plume_map;
pub use profile::{plot_centerline_profile, plot_profiles_comparison};
