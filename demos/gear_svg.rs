//! This demo generates a gear profile, prints its report, and writes an SVG

use gearrs::report;
use gearrs::{GearProfile, GearSpec, verify_symmetry};
use std::fs;

const PATH: &str = "svg";

fn main() {
    // Ensure the folder exists
    let _ = fs::create_dir_all(PATH);

    let spec = GearSpec::new(
        12,     // z – number of teeth
        2.1336, // module [mm]
        20.0,   // α – pressure angle [deg]
    )
    .unwrap();
    let dims = spec.dimensions();
    let gear = GearProfile::generate(&spec).unwrap();

    print!("{}", report::gear_summary(&spec, &dims));
    print!("{}", report::symmetry_summary(&verify_symmetry(&gear.teeth()[0])));

    gearrs::io::svg::write_svg(format!("{PATH}/gear_involute.svg"), &gear, &dims).unwrap();
}
