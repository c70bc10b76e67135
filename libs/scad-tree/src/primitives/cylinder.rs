//! Cylinder and frustum leaf nodes.

use std::fmt::{self, Write};

use config::constants::MIN_FACES;

use crate::component::Component;
use crate::object::ScadObject;
use crate::writer::IndentWriter;

#[derive(Debug)]
struct Cylinder {
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    faces: u32,
    center: bool,
}

impl ScadObject for Cylinder {
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result {
        writeln!(
            writer,
            "cylinder(h = {}, r1 = {}, r2 = {}, center = {}, $fn = {});",
            self.height, self.radius_bottom, self.radius_top, self.center, self.faces
        )
    }

    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result {
        write!(
            writer,
            "CYLINDER({}, {}, {}, {}, {})",
            self.height, self.radius_bottom, self.radius_top, self.faces, self.center
        )
    }
}

/// Creates a straight cylinder leaf.
///
/// # Arguments
/// * `radius` - Radius of both end caps.
/// * `height` - Extent along Z.
/// * `faces` - Tessellation face count.
/// * `center` - Center on the Z = 0 plane instead of sitting on it.
///
/// # Examples
/// ```
/// use scad_tree::primitives::cylinder;
///
/// let shaft = cylinder(5.0, 20.0, 50, true);
/// assert!(shaft.to_scad().unwrap().contains("cylinder(h = 20, r1 = 5, r2 = 5"));
/// ```
pub fn cylinder(radius: f64, height: f64, faces: u32, center: bool) -> Component {
    frustum(radius, radius, height, faces, center)
}

/// Creates a tapered cylinder leaf with independent bottom and top radii.
///
/// Negative dimensions clamp to zero and the face count is floored at
/// `MIN_FACES`.
pub fn frustum(
    radius_bottom: f64,
    radius_top: f64,
    height: f64,
    faces: u32,
    center: bool,
) -> Component {
    Component::from_node(Cylinder {
        height: height.max(0.0),
        radius_bottom: radius_bottom.max(0.0),
        radius_top: radius_top.max(0.0),
        faces: faces.max(MIN_FACES),
        center,
    })
}
