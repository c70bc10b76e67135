use crate::primitives::{cube, cylinder, sphere};

#[test]
fn union_block_contains_both_operands_in_order() {
    let a = sphere(1.0, 32, true);
    let b = cube(1.0, 1.0, 1.0, false);
    let script = (a + b).to_scad().expect("render");
    assert!(script.starts_with("union() {"));
    assert!(script.trim_end().ends_with("} // End union"));
    let sphere_at = script.find("sphere").expect("sphere present");
    let cube_at = script.find("cube").expect("cube present");
    assert!(sphere_at < cube_at);
}

#[test]
fn difference_preserves_base_then_subtrahend() {
    let base = cube(4.0, 4.0, 4.0, true);
    let hole = cylinder(1.0, 5.0, 32, true);
    let script = (base - hole).to_scad().expect("render");
    assert!(script.starts_with("difference() {"));
    let cube_at = script.find("cube").expect("cube present");
    let cylinder_at = script.find("cylinder").expect("cylinder present");
    assert!(cube_at < cylinder_at);
}

#[test]
fn intersection_renders_a_block() {
    let a = sphere(2.0, 16, true);
    let b = cube(3.0, 3.0, 3.0, true);
    let script = a.intersection(&b).to_scad().expect("render");
    assert!(script.starts_with("intersection() {"));
    assert!(script.trim_end().ends_with("} // End intersection"));
}

#[test]
fn nested_blocks_indent_two_spaces_per_level() {
    let script = sphere(2.0, 32, true)
        .translate(1.0, 0.0, 0.0)
        .to_scad()
        .expect("render");
    assert_eq!(
        script,
        "translate([1, 0, 0]) {\n  sphere(r = 2, $fn = 32);\n} // End translate\n"
    );
}

#[test]
fn minkowski_emits_faces_resolution() {
    let a = cylinder(3.0, 5.0, 16, true);
    let b = sphere(1.0, 16, true);
    let script = a.minkowski(&b, 16).to_scad().expect("render");
    assert!(script.starts_with("minkowski($fn = 16) {"));
    assert!(script.trim_end().ends_with("} // End minkowski"));
}

#[test]
fn transform_dumps_name_child_then_params() {
    let dump = sphere(1.0, 8, true)
        .rotate(90.0, 0.0, 0.0)
        .to_ast()
        .expect("render");
    assert_eq!(dump, "ROTATE(SPHERE(1, 8), 90, 0, 0)\n");
}

#[test]
fn scale_and_mirror_render_vector_blocks() {
    let base = cube(1.0, 2.0, 3.0, true);
    let scaled = base.scale(2.0, 2.0, 1.0).to_scad().expect("render");
    assert!(scaled.starts_with("scale([2, 2, 1]) {"));
    let mirrored = base.mirror(1.0, 0.0, 0.0).to_scad().expect("render");
    assert!(mirrored.starts_with("mirror([1, 0, 0]) {"));
}

#[test]
fn minkowski_dump_lists_operands_then_faces() {
    let a = cylinder(3.0, 5.0, 16, true);
    let b = sphere(1.0, 16, true);
    let dump = a.minkowski(&b, 16).to_ast().expect("render");
    assert_eq!(
        dump,
        "MINKOWSKI(CYLINDER(5, 3, 3, 16, true), SPHERE(1, 16), 16)\n"
    );
}
