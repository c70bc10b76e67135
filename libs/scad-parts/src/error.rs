//! Error types for part construction.
//!
//! Geometric input never fails — degenerate parameters are clamped by the
//! tree crate. The only failure mode here is naming a part size that has no
//! table row.

use thiserror::Error;

/// Raised when a metric size designation cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMetricError {
    /// The designation does not name a size with a table row.
    #[error("unknown metric size designation: {0}")]
    UnknownSize(String),
}
