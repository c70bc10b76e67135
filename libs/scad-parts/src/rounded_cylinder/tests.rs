use super::*;

#[test]
fn seam_construction_matches_reference_geometry() {
    let script = RoundedCylinder::new(10.0, 20.0, 3.0)
        .faces(50)
        .build()
        .to_scad()
        .expect("render");
    // Inner cylinder shrunk by the corner radius, full height.
    assert!(script.contains("cylinder(h = 20, r1 = 7, r2 = 7, center = true, $fn = 50);"));
    // Middle cylinder at full radius, shortened by both corners.
    assert!(script.contains("cylinder(h = 14, r1 = 10, r2 = 10, center = true, $fn = 50);"));
    // Seam toroids sit on both cap planes.
    assert!(script.contains("translate([0, 0, 7]) {"));
    assert!(script.contains("translate([0, 0, -7]) {"));
    assert_eq!(
        script
            .matches("rotate_extrude($fn = 50) translate([7, 0, 0]) circle(r = 3, $fn = 50);")
            .count(),
        2
    );
}

#[test]
fn oversized_corner_radius_clamps_to_half_height() {
    let clamped = RoundedCylinder::new(5.0, 2.0, 10.0).build();
    let explicit = RoundedCylinder::new(5.0, 2.0, 1.0).build();
    assert_eq!(
        clamped.to_scad().expect("render"),
        explicit.to_scad().expect("render")
    );
}

#[test]
fn corner_radius_beyond_radius_behaves_like_radius() {
    let clamped = RoundedCylinder::new(5.0, 100.0, 7.0).build();
    let explicit = RoundedCylinder::new(5.0, 100.0, 5.0).build();
    assert_eq!(
        clamped.to_scad().expect("render"),
        explicit.to_scad().expect("render")
    );
}

#[test]
fn square_caps_use_flat_segments() {
    let script = RoundedCylinder::new(10.0, 20.0, 3.0)
        .corners(false, false)
        .faces(50)
        .build()
        .to_scad()
        .expect("render");
    assert!(!script.contains("rotate_extrude"));
    assert_eq!(
        script
            .matches("cylinder(h = 6, r1 = 10, r2 = 10, center = true, $fn = 50);")
            .count(),
        2
    );
}

#[test]
fn uncentered_shape_is_lifted_by_half_its_height() {
    let script = RoundedCylinder::new(10.0, 20.0, 3.0)
        .centered(false)
        .build()
        .to_scad()
        .expect("render");
    assert!(script.starts_with("translate([0, 0, 10]) {"));
}

#[test]
fn dump_is_union_rooted() {
    let dump = RoundedCylinder::new(4.0, 9.0, 1.0)
        .build()
        .to_ast()
        .expect("render");
    assert!(dump.starts_with("UNION("));
    assert!(dump.contains("TOROID(3, 1, 100)"));
}

#[test]
fn frustum_sweep_combines_core_and_sphere_via_minkowski() {
    let script = RoundedFrustum::new(6.0, 4.0, 10.0, 1.0)
        .faces(20)
        .build()
        .to_scad()
        .expect("render");
    assert!(script.starts_with("minkowski($fn = 20) {"));
    assert!(script.contains("cylinder(h = 9, r1 = 5, r2 = 3, center = true, $fn = 20);"));
    assert!(script.contains("translate([5, 0, 9]) {"));
    assert!(script.contains("sphere(r = 1, $fn = 20);"));
}

#[test]
fn frustum_corner_radius_clamps_to_smallest_radius() {
    let clamped = RoundedFrustum::new(3.0, 5.0, 20.0, 99.0).build();
    let explicit = RoundedFrustum::new(3.0, 5.0, 20.0, 3.0).build();
    assert_eq!(
        clamped.to_scad().expect("render"),
        explicit.to_scad().expect("render")
    );
}
