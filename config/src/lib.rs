//! # Config Crate
//!
//! Centralized configuration constants for the CSG script pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FACES, EPSILON_TOLERANCE, INDENT_WIDTH};
//!
//! // Use EPSILON_TOLERANCE for "is this offset zero" checks
//! let offset: f64 = 1.0e-12;
//! assert!(offset.abs() <= EPSILON_TOLERANCE);
//!
//! // Use the stock resolution when a caller does not override $fn
//! let requested = 0u32;
//! let faces = if requested > 0 { requested } else { DEFAULT_FACES };
//! assert_eq!(faces, DEFAULT_FACES);
//!
//! // Script nesting is a fixed number of spaces per level
//! assert_eq!(INDENT_WIDTH, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer Compatible**: Defaults match the external renderer's behavior
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
