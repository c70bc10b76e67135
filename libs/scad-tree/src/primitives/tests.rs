use super::*;

#[test]
fn cylinder_renders_one_statement() {
    let script = cylinder(5.0, 20.0, 50, true).to_scad().expect("render");
    assert_eq!(
        script,
        "cylinder(h = 20, r1 = 5, r2 = 5, center = true, $fn = 50);\n"
    );
}

#[test]
fn frustum_keeps_independent_radii() {
    let script = frustum(4.0, 2.0, 6.0, 12, false).to_scad().expect("render");
    assert_eq!(
        script,
        "cylinder(h = 6, r1 = 4, r2 = 2, center = false, $fn = 12);\n"
    );
}

#[test]
fn negative_dimensions_clamp_to_zero() {
    let script = cylinder(-1.0, -2.0, 8, true).to_scad().expect("render");
    assert_eq!(
        script,
        "cylinder(h = 0, r1 = 0, r2 = 0, center = true, $fn = 8);\n"
    );
}

#[test]
fn face_count_clamps_to_renderable_minimum() {
    let script = sphere(1.0, 1, true).to_scad().expect("render");
    assert_eq!(script, "sphere(r = 1, $fn = 3);\n");
}

#[test]
fn non_centered_sphere_sits_on_the_base_plane() {
    let script = sphere(3.0, 32, false).to_scad().expect("render");
    assert!(script.starts_with("translate([0, 0, 3]) {"));
    assert!(script.contains("sphere(r = 3, $fn = 32);"));
}

#[test]
fn cube_renders_size_vector() {
    let script = cube(1.0, 2.5, 3.0, false).to_scad().expect("render");
    assert_eq!(script, "cube(size = [1, 2.5, 3], center = false);\n");
}

#[test]
fn toroid_is_a_single_statement() {
    let script = toroid(7.0, 3.0, 50).to_scad().expect("render");
    assert_eq!(
        script,
        "rotate_extrude($fn = 50) translate([7, 0, 0]) circle(r = 3, $fn = 50);\n"
    );
}

#[test]
fn toroid_dump_lists_ring_then_tube() {
    let dump = toroid(7.0, 3.0, 50).to_ast().expect("render");
    assert_eq!(dump, "TOROID(7, 3, 50)\n");
}
