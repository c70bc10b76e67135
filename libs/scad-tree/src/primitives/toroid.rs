//! Toroid leaf node.

use std::fmt::{self, Write};

use config::constants::MIN_FACES;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

#[derive(Debug)]
struct Toroid {
    radius: f64,
    tube_radius: f64,
    faces: u32,
}

impl ScadObject for Toroid {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        // One fixed statement; the nested keywords carry no child recursion.
        writeln!(
            writer,
            "rotate_extrude($fn = {}) translate([{}, 0, 0]) circle(r = {}, $fn = {});",
            self.faces, self.radius, self.tube_radius, self.faces
        )
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        write!(
            writer,
            "TOROID({}, {}, {})",
            self.radius, self.tube_radius, self.faces
        )
    }
}

/// Creates a toroid leaf: a circle of `tube_radius` swept around the Z axis
/// at distance `radius`, centered on the Z = 0 plane.
pub fn toroid(radius: f64, tube_radius: f64, faces: u32) -> Component {
    Component::from_node(Toroid {
        radius: radius.max(0.0),
        tube_radius: tube_radius.max(0.0),
        faces: faces.max(MIN_FACES),
    })
}
