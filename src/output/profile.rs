//! Centerline profile plotting
//!
//! This module provides plotting functions for concentration-vs-distance
//! curves along the plume centerline (`y = 0`).
//!
//! # Available functions
//!
//! - [`plot_centerline_profile`]    - Single profile: concentration vs distance
//! - [`plot_profiles_comparison`]   - Overlay several profiles on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use plume_rs::output::plot_centerline_profile;
//! use plume_rs::sampling::{sample_centerline, AxisSpec};
//!
//! let axis = AxisSpec::new("x", 1.0, 500.0, 1.0);
//! let (distances, readings) = sample_centerline(&plume, &axis)?;
//! plot_centerline_profile(&distances, &readings, "centerline.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a single centerline profile (concentration vs downgradient distance)
///
/// # Arguments
///
/// * `distances`   - Downgradient distances \[m\]
/// * `readings`    - Concentration at each distance \[µg/L\]
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the slices are empty or differ in length, or if the
/// backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use plume_rs::output::plot_centerline_profile;
///
/// plot_centerline_profile(&distances, &readings, "centerline.png", None)?;
/// ```
pub fn plot_centerline_profile(
    distances: &[f64],
    readings: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if distances.is_empty() {
        return Err("No profile data provided".into());
    }
    if distances.len() != readings.len() {
        return Err(format!(
            "Profile length mismatch: {} distances vs {} readings",
            distances.len(),
            readings.len()
        )
        .into());
    }

    let default_config = PlotConfig::centerline(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_distance = distances.last().copied().unwrap_or(1.0);
    let max_reading = readings
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, distances, readings, config, max_distance, max_reading)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, distances, readings, config, max_distance, max_reading)
        }
    }
}

/// Plot multiple centerline profiles overlaid for comparison
///
/// Useful for comparing dispersivities, retardation factors or release
/// durations on the same axes. Each profile is drawn with a distinct color.
///
/// # Arguments
///
/// * `profiles`    - Vec of `(label, distances, readings)`
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `profiles` is empty, a profile's slices differ in
/// length, or the backend fails.
///
/// # Example
///
/// ```rust,ignore
/// use plume_rs::output::plot_profiles_comparison;
///
/// let profiles = vec![
///     ("R = 1", distances.as_slice(), conservative.as_slice()),
///     ("R = 5", distances.as_slice(), sorbing.as_slice()),
/// ];
/// plot_profiles_comparison(profiles, "retardation.png", None)?;
/// ```
pub fn plot_profiles_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    for (label, distances, readings) in &profiles {
        if distances.len() != readings.len() {
            return Err(format!(
                "Profile '{}' length mismatch: {} distances vs {} readings",
                label,
                distances.len(),
                readings.len()
            )
            .into());
        }
    }

    let default_config = PlotConfig::centerline(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_distance = profiles
        .iter()
        .map(|(_, distances, _)| distances.last().copied().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    let max_reading = profiles
        .iter()
        .flat_map(|(_, _, readings)| readings.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, max_distance, max_reading)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, max_distance, max_reading)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render a single centerline profile with the given drawing backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    distances: &[f64],
    readings: &[f64],
    config: &PlotConfig,
    max_distance: f64,
    max_reading: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_distance, 0.0..(max_reading * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            distances.iter().zip(readings.iter()).map(|(x, c)| (*x, *c)),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Centerline Concentration")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render overlaid centerline profiles for comparison
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    max_distance: f64,
    max_reading: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_distance, 0.0..(max_reading * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    for (idx, (label, distances, readings)) in profiles.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                distances.iter().zip(readings.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AquiferProperties, DomenicoPlume, SourceGeometry};
    use crate::sampling::{sample_centerline, AxisSpec};

    fn survey_profile() -> (Vec<f64>, Vec<f64>) {
        let plume = DomenicoPlume::new(
            SourceGeometry::new(10.0, 5.0, 100.0),
            AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
            36_500.0,
        );
        sample_centerline(&plume, &AxisSpec::new("x", 1.0, 500.0, 1.0)).unwrap()
    }

    #[test]
    fn test_plot_centerline_png() {
        let (distances, readings) = survey_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        plot_centerline_profile(&distances, &readings, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_centerline_svg() {
        let (distances, readings) = survey_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");

        plot_centerline_profile(&distances, &readings, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_centerline_custom_config() {
        let (distances, readings) = survey_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        let mut config = PlotConfig::centerline("Benzene Centerline");
        config.line_color = BLUE;

        plot_centerline_profile(&distances, &readings, path.to_str().unwrap(), Some(&config))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_centerline_empty_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        let result = plot_centerline_profile(&[], &[], path.to_str().unwrap(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_plot_centerline_length_mismatch_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        let result =
            plot_centerline_profile(&[1.0, 2.0], &[10.0], path.to_str().unwrap(), None);

        let message = result.err().unwrap().to_string();
        assert!(message.contains("mismatch"), "unexpected: {}", message);
    }

    #[test]
    fn test_plot_profiles_comparison() {
        let source = SourceGeometry::new(10.0, 5.0, 100.0);
        let conservative = DomenicoPlume::new(
            source,
            AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0),
            36_500.0,
        );
        let sorbing = DomenicoPlume::new(
            source,
            AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 2.0),
            36_500.0,
        );
        let axis = AxisSpec::new("x", 1.0, 500.0, 1.0);
        let (distances, fast) = sample_centerline(&conservative, &axis).unwrap();
        let (_, slow) = sample_centerline(&sorbing, &axis).unwrap();

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        plot_profiles_comparison(
            vec![
                ("R = 1", distances.as_slice(), fast.as_slice()),
                ("R = 2", distances.as_slice(), slow.as_slice()),
            ],
            path.to_str().unwrap(),
            None,
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_profiles_comparison_empty_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");

        let result = plot_profiles_comparison(vec![], path.to_str().unwrap(), None);
        assert!(result.is_err());
    }
}
