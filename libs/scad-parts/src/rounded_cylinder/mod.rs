//! Rounded cylinder builders.
//!
//! Two construction strategies from the same family: explicit seam unions
//! for straight cylinders (cap toroids welded onto a two-cylinder core),
//! and a Minkowski sweep for frustums whose profile varies over height,
//! where seam toroids would not fit a tapered wall.

use serde::{Deserialize, Serialize};

use config::constants::DEFAULT_FACES;
use scad_tree::primitives::{cylinder, frustum, sphere, toroid};
use scad_tree::Component;

/// Parameters for a straight cylinder with rounded cap edges.
///
/// # Examples
/// ```
/// use scad_parts::RoundedCylinder;
///
/// let shape = RoundedCylinder::new(10.0, 20.0, 3.0).build();
/// let script = shape.to_scad().unwrap();
/// assert!(script.contains("cylinder(h = 20, r1 = 7, r2 = 7"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedCylinder {
    /// Outer radius.
    pub radius: f64,
    /// Total height including both caps.
    pub height: f64,
    /// Radius of the cap edge rounding.
    pub corner_radius: f64,
    /// Round the upper cap edge.
    pub up: bool,
    /// Round the lower cap edge.
    pub down: bool,
    /// Tessellation face count.
    pub faces: u32,
    /// Center on the Z = 0 plane instead of sitting on it.
    pub center: bool,
}

impl RoundedCylinder {
    /// Creates the parameter bundle with the stock defaults: both caps
    /// rounded, `DEFAULT_FACES` resolution, centered.
    pub fn new(radius: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            radius,
            height,
            corner_radius,
            up: true,
            down: true,
            faces: DEFAULT_FACES,
            center: true,
        }
    }

    /// Selects which cap edges are rounded. A square cap receives a flat
    /// cylinder segment in place of the seam toroid.
    pub fn corners(mut self, up: bool, down: bool) -> Self {
        self.up = up;
        self.down = down;
        self
    }

    /// Overrides the tessellation face count.
    pub fn faces(mut self, faces: u32) -> Self {
        self.faces = faces;
        self
    }

    /// Chooses between a centered shape and one resting on the Z = 0 plane.
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Builds the component tree.
    ///
    /// A corner radius exceeding the radius or half the height is reduced
    /// to the feasible maximum before any geometry is assembled; the
    /// effective value is what renders.
    pub fn build(&self) -> Component {
        let corner_radius = self
            .corner_radius
            .min(self.radius)
            .min(self.height / 2.0)
            .max(0.0);
        let half_height = self.height / 2.0;

        let inner = cylinder(self.radius - corner_radius, self.height, self.faces, true);
        let middle = cylinder(
            self.radius,
            self.height - 2.0 * corner_radius,
            self.faces,
            true,
        );
        let mut shape = inner + middle;

        shape = shape + self.cap(corner_radius, self.up, half_height - corner_radius);
        shape = shape + self.cap(corner_radius, self.down, -(half_height - corner_radius));

        if self.center {
            shape
        } else {
            shape.translate(0.0, 0.0, half_height)
        }
    }

    fn cap(&self, corner_radius: f64, rounded: bool, z: f64) -> Component {
        if rounded {
            toroid(self.radius - corner_radius, corner_radius, self.faces).translate(0.0, 0.0, z)
        } else {
            cylinder(self.radius, 2.0 * corner_radius, self.faces, true).translate(0.0, 0.0, z)
        }
    }
}

/// Parameters for a tapered cylinder rounded by a Minkowski sweep.
///
/// The core frustum is shrunk by the corner radius and the rounding sphere
/// is swept across it, which rounds a profile that varies over height
/// without per-cap seam geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedFrustum {
    /// Radius at the bottom cap.
    pub radius_bottom: f64,
    /// Radius at the top cap.
    pub radius_top: f64,
    /// Total height.
    pub height: f64,
    /// Radius of the edge rounding.
    pub corner_radius: f64,
    /// Tessellation face count.
    pub faces: u32,
    /// Center on the Z = 0 plane instead of sitting on it.
    pub center: bool,
}

impl RoundedFrustum {
    /// Creates the parameter bundle with the stock defaults:
    /// `DEFAULT_FACES` resolution, centered.
    pub fn new(radius_bottom: f64, radius_top: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            radius_bottom,
            radius_top,
            height,
            corner_radius,
            faces: DEFAULT_FACES,
            center: true,
        }
    }

    /// Overrides the tessellation face count.
    pub fn faces(mut self, faces: u32) -> Self {
        self.faces = faces;
        self
    }

    /// Chooses between a centered shape and one resting on the Z = 0 plane.
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Builds the component tree: core frustum shrunk by the corner radius,
    /// rounding sphere moved to the shape's edge, Minkowski sweep of both.
    ///
    /// The corner radius is clamped to the smallest of both radii and half
    /// the height before any geometry is assembled.
    pub fn build(&self) -> Component {
        let corner_radius = self
            .corner_radius
            .min(self.radius_bottom)
            .min(self.radius_top)
            .min(self.height / 2.0)
            .max(0.0);

        let core = frustum(
            self.radius_bottom - corner_radius,
            self.radius_top - corner_radius,
            self.height - corner_radius,
            self.faces,
            self.center,
        );
        let ball = sphere(corner_radius, self.faces, self.center).translate(
            self.radius_bottom - corner_radius,
            0.0,
            self.height - corner_radius,
        );
        core.minkowski(&ball, self.faces)
    }
}

#[cfg(test)]
mod tests;
