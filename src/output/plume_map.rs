//! Plan-view plume map rendering
//!
//! This module draws a sampled [`ConcentrationField`] as a colored scatter
//! map: one marker per grid point whose reading clears the lowest band
//! edge, colored by the band the reading falls in.
//!
//! # Key Difference from `profile`
//!
//! This module plots the **plan view** (transverse distance vs downgradient
//! distance), not concentration curves. Concentration shows as color, not
//! as a plotted value.
//!
//! # Usage
//!
//! ```rust,ignore
//! use plume_rs::output::{plot_plume_map, BandScale};
//!
//! let field = sample_field(&plume, &grid)?;
//! let bands = BandScale::relative_to_source(plume.source_concentration());
//! plot_plume_map(&field, &bands, "plume.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::bands::BandScale;
use super::config::{PlotConfig, NO_TITLE};
use crate::sampling::ConcentrationField;

// =================================================================================================
// Band Grouping
// =================================================================================================

/// Split the field's grid points into one coordinate list per band
///
/// Readings below the lowest band edge are dropped: those points stay
/// background-colored on the map.
///
/// # Arguments
///
/// * `field` - Sampled concentration field
/// * `bands` - Band scale classifying the readings
///
/// # Returns
///
/// `Vec<Vec<(x, y)>>` of length `bands.len()`, coldest band first.
fn group_by_band(field: &ConcentrationField, bands: &BandScale) -> Vec<Vec<(f64, f64)>> {
    let mut groups: Vec<Vec<(f64, f64)>> = vec![Vec::new(); bands.len()];

    for (x, y, concentration) in field.iter_points() {
        if let Some(band) = bands.band_of(concentration) {
            groups[band].push((x, y));
        }
    }

    groups
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a plan-view plume map (banded scatter of the sampled field)
///
/// Draws one circular marker per grid point whose reading reaches the
/// lowest band edge, colored by band via `config.get_series_color`. Bands
/// are drawn coldest first, so where markers overlap the hotter band sits
/// on top. Each non-empty band gets a legend entry with its range label.
///
/// # Arguments
///
/// * `field`       - Sampled concentration field
/// * `bands`       - Band scale classifying the readings
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses the
///                   [`PlotConfig::plume_map`] defaults
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use plume_rs::output::{plot_plume_map, BandScale};
///
/// let bands = BandScale::relative_to_source(100.0);
/// plot_plume_map(&field, &bands, "plume.png", None)?;
/// ```
pub fn plot_plume_map(
    field: &ConcentrationField,
    bands: &BandScale,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let groups = group_by_band(field, bands);

    let default_config = PlotConfig::plume_map(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_plume_map_impl(backend, field, &groups, bands, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_plume_map_impl(backend, field, &groups, bands, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the banded scatter map with the given drawing backend
fn plot_plume_map_impl<DB: DrawingBackend>(
    backend: DB,
    field: &ConcentrationField,
    groups: &[Vec<(f64, f64)>],
    bands: &BandScale,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    // Pad the axes by one grid step so edge markers are not clipped.
    let grid = field.grid();
    let x_range = (grid.x.start - grid.x.step)..(grid.x.end + grid.x.step);
    let y_range = (grid.y.start - grid.y.step)..(grid.y.end + grid.y.step);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    for (band, group) in groups.iter().enumerate() {
        if group.is_empty() {
            continue;
        }

        let color = config.get_series_color(band);
        let marker_size = config.marker_size;

        chart
            .draw_series(
                group
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), marker_size, color.filled())),
            )?
            .label(bands.label(band))
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
