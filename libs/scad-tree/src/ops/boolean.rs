//! Binary boolean composition nodes.

use std::fmt::{self, Write};

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

fn render_block(
    keyword: &str,
    first: &Component,
    second: &Component,
    writer: &mut IndentWriter,
) -> fmt::Result {
    writeln!(writer, "{keyword}() {{")?;
    {
        let mut block = writer.indent();
        first.render_scad(&mut block)?;
        second.render_scad(&mut block)?;
    }
    writeln!(writer, "}} // End {keyword}")
}

fn render_dump(
    opname: &str,
    first: &Component,
    second: &Component,
    writer: &mut IndentWriter,
) -> fmt::Result {
    write!(writer, "{opname}(")?;
    first.render_ast(writer)?;
    write!(writer, ", ")?;
    second.render_ast(writer)?;
    write!(writer, ")")
}

/// Union of two components; operands render in the order supplied.
#[derive(Debug)]
pub struct Union {
    first: Component,
    second: Component,
}

impl Union {
    /// Wraps both operands into a union node and returns the new handle.
    pub fn new(first: Component, second: Component) -> Component {
        Component::from_node(Self { first, second })
    }
}

impl ScadObject for Union {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("union", &self.first, &self.second, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("UNION", &self.first, &self.second, writer)
    }
}

/// Difference of two components: the first operand is the base, the second
/// is subtracted from it. Operand order is semantic and preserved exactly.
#[derive(Debug)]
pub struct Difference {
    base: Component,
    subtrahend: Component,
}

impl Difference {
    /// Wraps both operands into a difference node and returns the new handle.
    pub fn new(base: Component, subtrahend: Component) -> Component {
        Component::from_node(Self { base, subtrahend })
    }
}

impl ScadObject for Difference {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("difference", &self.base, &self.subtrahend, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("DIFFERENCE", &self.base, &self.subtrahend, writer)
    }
}

/// Intersection of two components.
#[derive(Debug)]
pub struct Intersection {
    first: Component,
    second: Component,
}

impl Intersection {
    /// Wraps both operands into an intersection node and returns the new
    /// handle.
    pub fn new(first: Component, second: Component) -> Component {
        Component::from_node(Self { first, second })
    }
}

impl ScadObject for Intersection {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_block("intersection", &self.first, &self.second, writer)
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        render_dump("INTERSECTION", &self.first, &self.second, writer)
    }
}
