//! Cube leaf node.

use std::fmt::{self, Write};

use glam::DVec3;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

#[derive(Debug)]
struct Cube {
    size: DVec3,
    center: bool,
}

impl ScadObject for Cube {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        writeln!(
            writer,
            "cube(size = [{}, {}, {}], center = {});",
            self.size.x, self.size.y, self.size.z, self.center
        )
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        write!(
            writer,
            "CUBE({}, {}, {}, {})",
            self.size.x, self.size.y, self.size.z, self.center
        )
    }
}

/// Creates an axis-aligned box leaf. Negative dimensions clamp to zero.
pub fn cube(x: f64, y: f64, z: f64, center: bool) -> Component {
    Component::from_node(Cube {
        size: DVec3::new(x, y, z).max(DVec3::ZERO),
        center,
    })
}
