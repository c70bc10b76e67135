//! # Scad-Parts Crate
//!
//! Composite shape builders on top of `scad-tree`. Each builder runs a pure
//! construction algorithm — primitives combined through decorators — and
//! hands back one composed component handle. Builders keep no state beyond
//! their construction parameters.
//!
//! ## Usage
//!
//! ```rust
//! use scad_parts::RoundedCylinder;
//!
//! let knob = RoundedCylinder::new(10.0, 20.0, 3.0).build();
//! let script = knob.to_scad().unwrap();
//! assert!(script.starts_with("union() {"));
//! ```

pub mod error;
pub mod nut;
pub mod rounded_cylinder;

// Re-exports for convenience
pub use error::ParseMetricError;
pub use nut::{Metric, NutData, NutShape};
pub use rounded_cylinder::{RoundedCylinder, RoundedFrustum};
