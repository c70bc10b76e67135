//! Sphere leaf node.

use std::fmt::{self, Write};

use config::constants::MIN_FACES;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

#[derive(Debug)]
struct Sphere {
    radius: f64,
    faces: u32,
}

impl ScadObject for Sphere {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        writeln!(writer, "sphere(r = {}, $fn = {});", self.radius, self.faces)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        write!(writer, "SPHERE({}, {})", self.radius, self.faces)
    }
}

/// Creates a sphere leaf.
///
/// The renderer's sphere is inherently centered on the origin, so
/// `center = false` shifts the leaf up by its radius along Z — half the
/// extent — leaving the shape resting on the Z = 0 plane.
pub fn sphere(radius: f64, faces: u32, center: bool) -> Component {
    let radius = radius.max(0.0);
    let leaf = Component::from_node(Sphere {
        radius,
        faces: faces.max(MIN_FACES),
    });
    if center {
        leaf
    } else {
        leaf.translate(0.0, 0.0, radius)
    }
}
