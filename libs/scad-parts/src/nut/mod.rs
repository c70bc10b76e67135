//! Hex nut part built from ISO 4032 dimension tables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use config::constants::DEFAULT_FACES;
use scad_tree::primitives::cylinder;
use scad_tree::Component;

use crate::error::ParseMetricError;

/// ISO metric thread sizes with a standard nut table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// M3 thread.
    M3,
    /// M4 thread.
    M4,
    /// M5 thread.
    M5,
    /// M6 thread.
    M6,
    /// M8 thread.
    M8,
}

impl Metric {
    /// Nominal thread diameter in millimetres.
    pub fn nominal_diameter(self) -> f64 {
        match self {
            Metric::M3 => 3.0,
            Metric::M4 => 4.0,
            Metric::M5 => 5.0,
            Metric::M6 => 6.0,
            Metric::M8 => 8.0,
        }
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    /// Parses a size designation such as `"M3"`.
    ///
    /// # Examples
    /// ```
    /// use scad_parts::Metric;
    ///
    /// let size: Metric = "M3".parse().unwrap();
    /// assert_eq!(size, Metric::M3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M3" => Ok(Metric::M3),
            "M4" => Ok(Metric::M4),
            "M5" => Ok(Metric::M5),
            "M6" => Ok(Metric::M6),
            "M8" => Ok(Metric::M8),
            other => Err(ParseMetricError::UnknownSize(other.to_string())),
        }
    }
}

/// Nut dimensions in millimetres, straight from the ISO 4032 table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutData {
    /// Wrench size: distance between two opposite flats.
    pub width_across_flats: f64,
    /// Distance between two opposite corners.
    pub width_across_corners: f64,
    /// Nut height.
    pub thickness: f64,
}

/// Hexagon nut part: the dimension bundle plus the built solid.
///
/// The solid is assembled once at construction — a six-faced prism sized by
/// the width across corners, minus the bore for the nominal thread — and
/// shared from then on; `data()` returns the same fixed triple on every
/// query.
///
/// # Examples
/// ```
/// use scad_parts::{Metric, NutShape};
///
/// let nut = NutShape::new(Metric::M3);
/// assert_eq!(nut.data().width_across_flats, 5.5);
/// assert_eq!(nut.data().thickness, 2.4);
/// ```
#[derive(Debug, Clone)]
pub struct NutShape {
    metric: Metric,
    data: NutData,
    shape: Component,
}

impl NutShape {
    /// Bore length relative to the prism so the subtraction never leaves
    /// coincident faces for the renderer to resolve.
    const BORE_CLEARANCE: f64 = 1.5;

    /// Looks up the table row for `metric` and builds the solid.
    pub fn new(metric: Metric) -> Self {
        let data = Self::lookup(metric);
        let prism = cylinder(data.width_across_corners / 2.0, data.thickness, 6, true);
        let bore = cylinder(
            metric.nominal_diameter() / 2.0,
            data.thickness * Self::BORE_CLEARANCE,
            DEFAULT_FACES,
            true,
        );
        Self {
            metric,
            data,
            shape: prism - bore,
        }
    }

    // ISO 4032 style-1 rows: s (flats), e (corners), m (height).
    fn lookup(metric: Metric) -> NutData {
        let (width_across_flats, width_across_corners, thickness) = match metric {
            Metric::M3 => (5.5, 6.01, 2.4),
            Metric::M4 => (7.0, 7.66, 3.2),
            Metric::M5 => (8.0, 8.79, 4.7),
            Metric::M6 => (10.0, 11.05, 5.2),
            Metric::M8 => (13.0, 14.38, 6.8),
        };
        NutData {
            width_across_flats,
            width_across_corners,
            thickness,
        }
    }

    /// The size class this nut was built for.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The fixed dimension triple; identical on every query.
    pub fn data(&self) -> NutData {
        self.data
    }

    /// Shared handle to the built solid.
    pub fn component(&self) -> Component {
        self.shape.clone()
    }
}

#[cfg(test)]
mod tests;
