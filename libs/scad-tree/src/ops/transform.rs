//! Affine transform nodes parameterized by an XYZ vector.

use std::fmt::{self, Write};

use glam::DVec3;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

fn render_block(
    keyword: &str,
    vector: DVec3,
    child: &Component,
    writer: &mut IndentWriter,
) -> fmt::Result {
    writeln!(
        writer,
        "{}([{}, {}, {}]) {{",
        keyword, vector.x, vector.y, vector.z
    )?;
    {
        let mut block = writer.indent();
        child.render_scad(&mut block)?;
    }
    writeln!(writer, "}} // End {keyword}")
}

fn render_dump(
    opname: &str,
    vector: DVec3,
    child: &Component,
    writer: &mut IndentWriter,
) -> fmt::Result {
    write!(writer, "{opname}(")?;
    child.render_ast(writer)?;
    write!(writer, ", {}, {}, {})", vector.x, vector.y, vector.z)
}

/// Translation by an XYZ offset.
#[derive(Debug)]
pub struct Translate {
    child: Component,
    offset: DVec3,
}

impl Translate {
    /// Wraps `child` in a translation node and returns the new handle.
    pub fn new(child: Component, offset: DVec3) -> Component {
        Component::from_node(Self { child, offset })
    }
}

impl ScadObject for Translate {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("translate", self.offset, &self.child, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("TRANSLATE", self.offset, &self.child, writer)
    }
}

/// Rotation by Euler angles in degrees around X, Y, then Z.
#[derive(Debug)]
pub struct Rotate {
    child: Component,
    angles: DVec3,
}

impl Rotate {
    /// Wraps `child` in a rotation node and returns the new handle.
    pub fn new(child: Component, angles: DVec3) -> Component {
        Component::from_node(Self { child, angles })
    }
}

impl ScadObject for Rotate {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("rotate", self.angles, &self.child, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("ROTATE", self.angles, &self.child, writer)
    }
}

/// Per-axis scaling.
#[derive(Debug)]
pub struct Scale {
    child: Component,
    factors: DVec3,
}

impl Scale {
    /// Wraps `child` in a scaling node and returns the new handle.
    pub fn new(child: Component, factors: DVec3) -> Component {
        Component::from_node(Self { child, factors })
    }
}

impl ScadObject for Scale {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("scale", self.factors, &self.child, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("SCALE", self.factors, &self.child, writer)
    }
}

/// Mirror across the plane whose normal is the given vector.
#[derive(Debug)]
pub struct Mirror {
    child: Component,
    normal: DVec3,
}

impl Mirror {
    /// Wraps `child` in a mirror node and returns the new handle.
    pub fn new(child: Component, normal: DVec3) -> Component {
        Component::from_node(Self { child, normal })
    }
}

impl ScadObject for Mirror {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("mirror", self.normal, &self.child, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("MIRROR", self.normal, &self.child, writer)
    }
}
