//! Minkowski sweep node.

use std::fmt::{self, Write};

use config::constants::MIN_FACES;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

/// Sweeps the second operand's outline across the first.
///
/// Used to build smooth rounded transitions between differing cross
/// sections where explicit seam unions would not fit. The face count is the
/// `$fn` resolution the renderer applies to the swept result.
#[derive(Debug)]
pub struct Minkowski {
    first: Component,
    second: Component,
    faces: u32,
}

impl Minkowski {
    /// Wraps both operands into a sweep node and returns the new handle.
    /// Face counts below the renderable minimum are clamped.
    pub fn new(first: Component, second: Component, faces: u32) -> Component {
        Component::from_node(Self {
            first,
            second,
            faces: faces.max(MIN_FACES),
        })
    }
}

impl ScadObject for Minkowski {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        writeln!(writer, "minkowski($fn = {}) {{", self.faces)?;
        {
            let mut block = writer.indent();
            self.first.render_scad(&mut block)?;
            self.second.render_scad(&mut block)?;
        }
        writeln!(writer, "}} // End minkowski")
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        write!(writer, "MINKOWSKI(")?;
        self.first.render_ast(writer)?;
        write!(writer, ", ")?;
        self.second.render_ast(writer)?;
        write!(writer, ", {})", self.faces)
    }
}
