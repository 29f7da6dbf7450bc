//! Example: Fence-Line Compliance Survey (Imperial Site Data)
//!
//! Field crews at older US sites report locations in feet. This survey
//! takes a site description in feet, converts it to the metric units the
//! model works in, maps the plume and checks the reading at the fence
//! line against a compliance limit.
//!
//! **Site description** (from the survey notes):
//! - Source zone: 33 ft wide, 16 ft deep, leaching at 100 µg/L
//! - Fence line: 330 ft downgradient of the source
//! - Release history: roughly 100 years
//!
//! **Aquifer** (slug tests + literature):
//! - v = 0.1 m/d, R = 1
//! - αx / αy / αz = 10 / 1 / 0.1 m

use plume_rs::{
    models::{AquiferProperties,
             DomenicoPlume,
             SourceGeometry},
    output::{plot_plume_map,
             BandScale,
             PlotConfig},
    physics::{feet_to_meters,
              meters_to_feet,
              ConcentrationModel},
    sampling::{sample_field,
               AxisSpec,
               GridSpec},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Fence-Line Compliance Survey");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Site description, as reported in feet ======

    let source_width_ft = 33.0;
    let source_depth_ft = 16.0;
    let fence_line_ft = 330.0;
    let compliance_limit = 5.0; // µg/L

    let source_width = feet_to_meters(source_width_ft);
    let source_depth = feet_to_meters(source_depth_ft);
    let fence_line = feet_to_meters(fence_line_ft);

    println!("Site Description:");
    println!("  Source width : {} ft ({:.2} m)", source_width_ft, source_width);
    println!("  Source depth : {} ft ({:.2} m)", source_depth_ft, source_depth);
    println!("  Fence line   : {} ft ({:.2} m)", fence_line_ft, fence_line);
    println!("  Limit        : {} µg/L\n", compliance_limit);

    // ====== Release scenario ======

    let source = SourceGeometry::new(source_width, source_depth, 100.0);
    let aquifer = AquiferProperties::new(0.1, 10.0, 1.0, 0.1, 1.0);
    let plume = DomenicoPlume::new(source, aquifer, 36_500.0);

    println!(
        "Plume front travel: {:.0} m ({:.0} ft)\n",
        plume.travel_distance(),
        meters_to_feet(plume.travel_distance())
    );

    // ====== Survey the site out to the fence line ======

    let grid = GridSpec::new(
        AxisSpec::new("x", 1.0, fence_line.ceil(), 1.0),
        AxisSpec::new("y", -20.0, 20.0, 1.0),
    );

    print!("Sampling {} points... ", grid.len());
    std::io::Write::flush(&mut std::io::stdout())?;

    let start = Instant::now();
    let field = sample_field(&plume, &grid)?;
    println!("✓ {:.2}s\n", start.elapsed().as_secs_f64());

    // ====== Map ======

    let tmp_dir = std::env::temp_dir();
    let map_path = tmp_dir.join("site_survey.png");

    let bands = BandScale::relative_to_source(plume.source_concentration());
    let config = PlotConfig::plume_map("Site Survey to the Fence Line");
    plot_plume_map(&field, &bands, map_path.to_str().unwrap(), Some(&config))?;
    println!("✓ {:?}\n", map_path);

    // ====== Compliance table along the centerline ======

    println!("═══════════════════════════════════════════════════════");
    println!("  Centerline Readings");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<12} {:<12} {:>14}", "x (ft)", "x (m)", "C (µg/L)");
    println!("{:-<40}", "");

    for &x_ft in &[33.0, 100.0, 200.0, 330.0] {
        let x = feet_to_meters(x_ft);
        println!(
            "{:<12} {:<12.2} {:>14.2}",
            x_ft,
            x,
            plume.centerline(x)
        );
    }

    // ====== Verdict ======

    let fence_reading = plume.centerline(fence_line);
    let status = if fence_reading <= compliance_limit {
        "✅ WITHIN LIMIT"
    } else {
        "❌ EXCEEDS LIMIT"
    };

    println!(
        "\nFence line ({} ft): {:.2} µg/L against a {} µg/L limit - {}",
        fence_line_ft, fence_reading, compliance_limit, status
    );

    Ok(())
}
