//! Groundwater plume survey
//!
//! Evaluates the Domenico-Robbins solution for a reference release
//! scenario over a plan-view survey grid, writes the banded plume map and
//! the centerline profile, then offers one interactive well reading.
//!
//! **Scenario** (sandy aquifer, conservative solute):
//! - C0 = 100 µg/L (source concentration)
//! - Y × Z = 10 m × 5 m (source width × depth)
//! - v = 0.1 m/d, R = 1 (seepage velocity, retardation)
//! - αx / αy / αz = 10 / 1 / 0.1 m (dispersivities)
//! - t = 36 500 d (100 years of release)

use plume_rs::{
    cli::run_well_query,
    models::{AquiferProperties,
             DomenicoPlume,
             SourceGeometry},
    output::{plot_centerline_profile,
             plot_plume_map,
             BandScale,
             PlotConfig},
    physics::ConcentrationModel,
    sampling::{sample_centerline,
               sample_field,
               AxisSpec,
               GridSpec},
};

use std::io;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Groundwater Plume Survey - Domenico-Robbins Solution");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Release scenario ======

    let source = SourceGeometry::new(10.0, 5.0, 100.0);
    let aquifer = AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0);
    let elapsed_time = 36_500.0; // 100 years

    println!("Scenario Parameters:");
    println!("  C0 (source)    : {} µg/L", source.concentration);
    println!("  Y (width)      : {} m", source.width);
    println!("  Z (depth)      : {} m", source.depth);
    println!("  v (velocity)   : {} m/d", aquifer.seepage_velocity);
    println!("  αx (longit.)   : {} m", aquifer.dispersivity_x);
    println!("  αy (transv.)   : {} m", aquifer.dispersivity_y);
    println!("  αz (vertical)  : {} m", aquifer.dispersivity_z);
    println!("  R (retardation): {}", aquifer.retardation);
    println!("  t (elapsed)    : {} d ({} y)\n", elapsed_time, elapsed_time / 365.0);

    let plume = DomenicoPlume::new(source, aquifer, elapsed_time);

    println!("Plume front travel: {} m\n", plume.travel_distance());

    // ====== Survey grid ======

    let grid = GridSpec::new(
        AxisSpec::new("x", 1.0, 100.0, 1.0),
        AxisSpec::new("y", -20.0, 20.0, 1.0),
    );

    println!("Survey Grid:");
    println!("  {}", grid.x);
    println!("  {}", grid.y);
    println!("  Total readings : {}\n", grid.len());

    // ====== Sample the field ======

    print!("Sampling the field... ");
    io::Write::flush(&mut io::stdout())?;

    let sampling_start = Instant::now();
    let field = sample_field(&plume, &grid)?;
    println!("✓ {:.2}s", sampling_start.elapsed().as_secs_f64());

    println!("  Above detection : {} of {}", field.detected_count(), field.len());
    println!("  Peak reading    : {:.2} µg/L\n", field.max_value());

    // ====== Render the maps ======

    println!("═══════════════════════════════════════════════════════");
    println!("  Generating Plots");
    println!("═══════════════════════════════════════════════════════\n");

    let bands = BandScale::relative_to_source(plume.source_concentration());

    let map_path = "plume_map.png";
    let map_config = PlotConfig::plume_map(format!(
        "Contaminant Plume after {} Years",
        elapsed_time / 365.0
    ));
    plot_plume_map(&field, &bands, map_path, Some(&map_config))?;
    println!("  Plume map         : {}", map_path);

    let (distances, readings) =
        sample_centerline(&plume, &AxisSpec::new("x", 1.0, 500.0, 1.0))?;

    let profile_path = "centerline_profile.png";
    let profile_config = PlotConfig::centerline("Centerline Concentration vs Distance");
    plot_centerline_profile(&distances, &readings, profile_path, Some(&profile_config))?;
    println!("  Centerline profile: {}\n", profile_path);

    // ====== Interactive well reading ======

    let stdin = io::stdin();
    run_well_query(&plume, &mut stdin.lock(), &mut io::stdout())?;

    Ok(())
}
