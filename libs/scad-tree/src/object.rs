//! The polymorphic node protocol shared by every tree node.

use std::fmt;

use crate::writer::IndentWriter;

/// A node in the CSG tree.
///
/// Nodes are immutable once constructed: both render operations take `&self`
/// and depend only on stored state (and, for decorators, the stored child
/// handles), so repeated renders of one tree are byte-identical. Nodes are
/// `Send + Sync`, which makes independent trees safe to render concurrently
/// on separate writers.
pub trait ScadObject: fmt::Debug + Send + Sync {
    /// Writes renderer-syntax statements describing this node into `writer`,
    /// recursing into child nodes for decorators. Output must stay
    /// syntactically well-formed for the external renderer no matter how
    /// degenerate the stored parameters are.
    fn render_scad(&self, writer: &mut IndentWriter) -> fmt::Result;

    /// Writes the diagnostic dump `OPNAME(<child>, params…)` into `writer`.
    /// The dump is a single line: no indentation, no embedded newlines.
    fn render_ast(&self, writer: &mut IndentWriter) -> fmt::Result;
}
