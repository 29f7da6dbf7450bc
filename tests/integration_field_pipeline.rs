//! Integration tests: survey pipeline from model to rendered plots
//!
//! Exercises the full chain the survey binary runs: evaluate a model over
//! a sampling grid, classify the readings into bands and render the plume
//! map and centerline profile to disk.

use plume_rs::cli::run_well_query;
use plume_rs::models::DETECTION_FLOOR;
use plume_rs::output::{plot_centerline_profile, plot_plume_map, plot_profiles_comparison, BandScale};
use plume_rs::physics::ConcentrationModel;
use plume_rs::sampling::{sample_centerline, sample_field, AxisSpec, GridSpec};

use std::io::Cursor;

mod common;
use common::{retarded_plume, survey_grid, survey_plume, CountingProbe, UniformSlab};

// =================================================================================================
// Grid Sampling
// =================================================================================================

#[test]
fn test_survey_grid_is_read_exactly_once_per_point() {
    let probe = CountingProbe::new();
    let grid = survey_grid();

    let field = sample_field(&probe, &grid).unwrap();

    assert_eq!(grid.len(), 4100);
    assert_eq!(field.len(), 4100);
    assert_eq!(probe.calls(), 4100);
}

#[test]
fn test_every_reading_lands_on_its_grid_point() {
    let probe = CountingProbe::new();
    let field = sample_field(&probe, &survey_grid()).unwrap();

    // The probe encodes its arguments into the reading, so any mix-up
    // between coordinates and storage shows up here.
    for (x, y, reading) in field.iter_points() {
        assert_eq!(reading, 1000.0 * x + y, "misfiled reading at ({}, {})", x, y);
    }
}

#[test]
fn test_sampled_field_matches_direct_evaluation() {
    let plume = survey_plume();
    let field = sample_field(&plume, &survey_grid()).unwrap();
    let grid = field.grid();

    for &(i, j) in &[(0, 0), (0, 20), (49, 20), (99, 0), (99, 40)] {
        let x = grid.x.coordinate(i);
        let y = grid.y.coordinate(j);
        assert_eq!(field.get(i, j), plume.concentration_at(x, y));
    }
}

#[test]
fn test_sampled_survey_respects_the_detection_floor() {
    let plume = survey_plume();
    let field = sample_field(&plume, &survey_grid()).unwrap();

    for (x, y, reading) in field.iter_points() {
        assert!(
            reading == 0.0 || reading > DETECTION_FLOOR,
            "floored reading {} leaked through at ({}, {})",
            reading,
            x,
            y
        );
    }

    // The survey window holds both clean and contaminated ground.
    assert!(field.detected_count() > 0);
    assert!(field.detected_count() < field.len());
}

#[test]
fn test_slab_source_covers_exactly_its_reach() {
    let slab = UniformSlab::new(40.0, 50.0);
    let grid = GridSpec::new(
        AxisSpec::new("x", 1.0, 100.0, 1.0),
        AxisSpec::new("y", -5.0, 5.0, 1.0),
    );

    let field = sample_field(&slab, &grid).unwrap();

    // 50 contaminated columns of 11 readings each.
    assert_eq!(field.len(), 1100);
    assert_eq!(field.detected_count(), 550);
    assert_eq!(field.max_value(), 40.0);
}

// =================================================================================================
// Band Classification
// =================================================================================================

#[test]
fn test_survey_readings_classify_into_the_expected_bands() {
    let plume = survey_plume();
    let bands = BandScale::relative_to_source(plume.source_concentration());

    // Fence line reads ~43.7 µg/L, squarely in the 30-50 band.
    let fence_line = plume.concentration_at(50.0, 0.0);
    assert_eq!(bands.band_of(fence_line), Some(1));
    assert_eq!(bands.label(1), "30 - 50 µg/L");

    // The hottest reading sits just past the source plane, above 90.
    let field = sample_field(&plume, &survey_grid()).unwrap();
    assert_eq!(bands.band_of(field.max_value()), Some(3));
    assert_eq!(bands.label(3), "> 90 µg/L");

    // Distal readings fall off the scale and are not plotted at all.
    assert_eq!(bands.band_of(plume.concentration_at(500.0, 0.0)), None);
}

// =================================================================================================
// Plot Rendering
// =================================================================================================

#[test]
fn test_plume_map_renders_from_a_sampled_survey() {
    let plume = survey_plume();
    let field = sample_field(&plume, &survey_grid()).unwrap();
    let bands = BandScale::relative_to_source(plume.source_concentration());

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("png");

    plot_plume_map(&field, &bands, path.to_str().unwrap(), None).unwrap();
    assert!(path.exists());
}

#[test]
fn test_plume_map_renders_to_svg() {
    let plume = survey_plume();
    let field = sample_field(&plume, &survey_grid()).unwrap();
    let bands = BandScale::relative_to_source(plume.source_concentration());

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("svg");

    plot_plume_map(&field, &bands, path.to_str().unwrap(), None).unwrap();
    assert!(path.exists());
}

#[test]
fn test_centerline_profile_renders_from_sampled_readings() {
    let plume = survey_plume();
    let axis = AxisSpec::new("x", 1.0, 500.0, 1.0);
    let (distances, readings) = sample_centerline(&plume, &axis).unwrap();

    assert_eq!(distances.len(), 500);
    assert_eq!(readings.len(), 500);

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("png");

    plot_centerline_profile(&distances, &readings, path.to_str().unwrap(), None).unwrap();
    assert!(path.exists());
}

#[test]
fn test_retardation_comparison_renders() {
    let axis = AxisSpec::new("x", 1.0, 500.0, 1.0);
    let conservative = retarded_plume(1.0);
    let sorbing = retarded_plume(5.0);

    let (x1, c1) = sample_centerline(&conservative, &axis).unwrap();
    let (x2, c2) = sample_centerline(&sorbing, &axis).unwrap();

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("png");

    plot_profiles_comparison(
        vec![("R = 1", &x1, &c1), ("R = 5", &x2, &c2)],
        path.to_str().unwrap(),
        None,
    )
    .unwrap();
    assert!(path.exists());
}

// =================================================================================================
// Full Survey Run
// =================================================================================================

#[test]
fn test_full_survey_pipeline_end_to_end() {
    let plume = survey_plume();

    // Sample, classify and render exactly as the survey binary does.
    let field = sample_field(&plume, &survey_grid()).unwrap();
    let bands = BandScale::relative_to_source(plume.source_concentration());

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let map_path = tmp.path().with_extension("png");
    plot_plume_map(&field, &bands, map_path.to_str().unwrap(), None).unwrap();

    let axis = AxisSpec::new("x", 1.0, 500.0, 1.0);
    let (distances, readings) = sample_centerline(&plume, &axis).unwrap();
    let profile_path = tmp.path().with_extension("svg");
    plot_centerline_profile(&distances, &readings, profile_path.to_str().unwrap(), None).unwrap();

    assert!(map_path.exists());
    assert!(profile_path.exists());

    // Finish with the interactive well check, scripted.
    let mut input = Cursor::new("y\n50\n0\n");
    let mut transcript = Vec::new();
    run_well_query(&plume, &mut input, &mut transcript).unwrap();

    let transcript = String::from_utf8(transcript).unwrap();
    let expected = format!(
        "Estimated concentration at (50 m, 0 m): {:.2} µg/L",
        plume.concentration_at(50.0, 0.0)
    );
    assert!(
        transcript.contains(&expected),
        "well reading missing from transcript:\n{}",
        transcript
    );
}
