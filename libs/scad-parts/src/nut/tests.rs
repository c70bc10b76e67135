use approx::assert_relative_eq;

use super::*;

#[test]
fn m3_data_is_the_fixed_table_row() {
    let nut = NutShape::new(Metric::M3);
    let data = nut.data();
    assert_relative_eq!(data.width_across_flats, 5.5);
    assert_relative_eq!(data.width_across_corners, 6.01);
    assert_relative_eq!(data.thickness, 2.4);
    assert_eq!(nut.data(), nut.data());
}

#[test]
fn solid_is_hex_prism_minus_bore() {
    let script = NutShape::new(Metric::M4)
        .component()
        .to_scad()
        .expect("render");
    assert!(script.starts_with("difference() {"));
    // Six-faced prism sized by the width across corners.
    assert!(script.contains("cylinder(h = 3.2, r1 = 3.83, r2 = 3.83, center = true, $fn = 6);"));
    // Bore at the nominal thread radius.
    assert!(script.contains("r1 = 2, r2 = 2"));
}

#[test]
fn metric_parses_known_designations() {
    assert_eq!("M5".parse::<Metric>().expect("parse"), Metric::M5);
    assert_eq!("M8".parse::<Metric>().expect("parse"), Metric::M8);
}

#[test]
fn metric_rejects_unknown_designations() {
    let err = "M42".parse::<Metric>().expect_err("no table row");
    assert_eq!(err, ParseMetricError::UnknownSize("M42".to_string()));
}

#[test]
fn shared_component_renders_identically() {
    let nut = NutShape::new(Metric::M6);
    assert_eq!(
        nut.component().to_scad().expect("render"),
        nut.component().to_scad().expect("render")
    );
}
