//! Centralized configuration values shared across the CSG script pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Numerical tolerance used when deciding whether an offset is zero.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Default tessellation face count for primitives that require angular
/// resolution such as cylinders or spheres.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FACES;
/// assert!(DEFAULT_FACES >= 12);
/// ```
pub const DEFAULT_FACES: u32 = 100;

/// Smallest face count the external renderer accepts for a closed profile.
/// Requested counts below this floor are clamped, never rejected.
///
/// # Examples
/// ```
/// use config::constants::MIN_FACES;
/// let requested = 1u32;
/// assert_eq!(requested.max(MIN_FACES), 3);
/// ```
pub const MIN_FACES: u32 = 3;

/// Spaces emitted per nesting level in generated scripts.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert_eq!(" ".repeat(INDENT_WIDTH).len(), 2);
/// ```
pub const INDENT_WIDTH: usize = 2;
