//! Shared-ownership handle over the node tree.

use std::fmt::{self, Write};
use std::ops::{Add, Sub};
use std::sync::Arc;

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use crate::error::Result;
use crate::object::ScadObject;
use crate::ops::{Difference, Intersection, Minkowski, Mirror, Rotate, Scale, Translate, Union};
use crate::writer::IndentWriter;

/// Copyable handle referring to a shared, immutable tree node.
///
/// Cloning a `Component` never copies the node graph; one node may sit under
/// several parents and is torn down by ordinary reference counting once the
/// last handle drops. Cycles cannot form because composition is strictly
/// bottom-up. A handle can never be empty — every constructor wraps a live
/// node — so "render an unset component" is unrepresentable rather than a
/// runtime error.
///
/// # Examples
/// ```
/// use scad_tree::primitives::sphere;
///
/// let ball = sphere(2.0, 32, true);
/// assert_eq!(ball.to_scad().unwrap(), "sphere(r = 2, $fn = 32);\n");
/// ```
#[derive(Clone)]
pub struct Component {
    node: Arc<dyn ScadObject>,
}

impl Component {
    /// Wraps a node into a fresh handle.
    pub fn from_node(node: impl ScadObject + 'static) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Renders the tree as renderer script text into `writer`.
    pub fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        self.node.render_scad(writer)
    }

    /// Renders the diagnostic dump into `writer`.
    pub fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        self.node.render_ast(writer)
    }

    /// Renders the tree and returns the script text.
    pub fn to_scad(&self) -> Result<String> {
        let mut writer = IndentWriter::new();
        self.render_scad(&mut writer)?;
        Ok(writer.into_string())
    }

    /// Renders the diagnostic dump as one newline-terminated line.
    pub fn to_ast(&self) -> Result<String> {
        let mut writer = IndentWriter::new();
        self.render_ast(&mut writer)?;
        writer.write_char('\n')?;
        Ok(writer.into_string())
    }

    /// Returns a new handle translated by the given offsets.
    ///
    /// An all-zero offset returns the same shared handle: translating by
    /// nothing changes neither the geometry nor the emitted text.
    pub fn translate(&self, x: f64, y: f64, z: f64) -> Self {
        let offset = DVec3::new(x, y, z);
        if offset.abs().max_element() <= EPSILON_TOLERANCE {
            return self.clone();
        }
        Translate::new(self.clone(), offset)
    }

    /// Returns a new handle rotated by the given Euler angles in degrees.
    pub fn rotate(&self, x: f64, y: f64, z: f64) -> Self {
        Rotate::new(self.clone(), DVec3::new(x, y, z))
    }

    /// Returns a new handle scaled per axis.
    pub fn scale(&self, x: f64, y: f64, z: f64) -> Self {
        Scale::new(self.clone(), DVec3::new(x, y, z))
    }

    /// Returns a new handle mirrored across the plane with the given normal.
    pub fn mirror(&self, x: f64, y: f64, z: f64) -> Self {
        Mirror::new(self.clone(), DVec3::new(x, y, z))
    }

    /// Returns the boolean intersection of this component and `other`.
    pub fn intersection(&self, other: &Component) -> Self {
        Intersection::new(self.clone(), other.clone())
    }

    /// Returns the Minkowski sweep of `other` across this component at the
    /// given tessellation resolution.
    pub fn minkowski(&self, other: &Component, faces: u32) -> Self {
        Minkowski::new(self.clone(), other.clone(), faces)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.node, f)
    }
}

impl Add for Component {
    type Output = Component;

    /// `a + b` is the union of both operands, rendered in supplied order.
    fn add(self, rhs: Component) -> Component {
        Union::new(self, rhs)
    }
}

impl Add<&Component> for &Component {
    type Output = Component;

    fn add(self, rhs: &Component) -> Component {
        Union::new(self.clone(), rhs.clone())
    }
}

impl Sub for Component {
    type Output = Component;

    /// `a - b` subtracts `b` from the base `a`; operand order is semantic.
    fn sub(self, rhs: Component) -> Component {
        Difference::new(self, rhs)
    }
}

impl Sub<&Component> for &Component {
    type Output = Component;

    fn sub(self, rhs: &Component) -> Component {
        Difference::new(self.clone(), rhs.clone())
    }
}
