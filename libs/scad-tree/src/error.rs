//! Error types for script generation.
//!
//! Geometric degeneracy is never an error in this crate — out-of-range
//! numeric input is clamped at construction time. The only failures that can
//! surface are formatting failures from the output sink.

use thiserror::Error;

/// Errors surfaced by the string-producing render entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing into the output buffer failed.
    #[error("failed to format script output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
