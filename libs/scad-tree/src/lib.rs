//! # Scad-Tree Crate
//!
//! An ownership-safe CSG component tree with deterministic script generation
//! for an external OpenSCAD-compatible renderer. No geometry is evaluated
//! here — the crate only *describes* solids as a tree of operations and
//! lowers that tree to text.
//!
//! ## Architecture
//!
//! ```text
//! primitives (leaf nodes) ─┐
//!                          ├─> Component (shared handle) ─> IndentWriter ─> script
//! ops (decorator nodes) ───┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scad_tree::primitives::{cylinder, sphere};
//!
//! let body = cylinder(5.0, 12.0, 64, true);
//! let cap = sphere(5.0, 64, true).translate(0.0, 0.0, 6.0);
//! let shape = body + cap;
//! let script = shape.to_scad()?;
//! assert!(script.starts_with("union() {"));
//! # Ok::<(), scad_tree::Error>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Immutable Nodes**: composition wraps existing nodes, never edits them
//! - **Structural Sharing**: handles are reference-counted; reuse is free
//! - **Always Emit**: degenerate numeric input is clamped, never rejected

pub mod component;
pub mod error;
pub mod object;
pub mod ops;
pub mod primitives;
pub mod writer;

// Re-exports for convenience
pub use component::Component;
pub use error::{Error, Result};
pub use object::ScadObject;
pub use writer::{IndentBlock, IndentWriter};
