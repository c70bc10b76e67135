//! Indentation-aware text sink for script emission.
//!
//! The writer owns its output buffer and tracks a nesting depth; every line
//! started while the depth is non-zero receives a fixed-width space prefix.
//! Depth changes are scoped through an RAII guard so rendering code cannot
//! leave the writer mis-indented on any exit path, panic unwind included.

use std::fmt;
use std::ops::{Deref, DerefMut};

use config::constants::INDENT_WIDTH;

/// Text sink that prefixes each line with the current nesting depth.
///
/// Implements [`std::fmt::Write`], so `write!`/`writeln!` drive it directly.
/// Indentation is applied lazily at the first non-newline character of a
/// line; blank lines carry no trailing padding.
///
/// # Examples
/// ```
/// use std::fmt::Write;
/// use scad_tree::IndentWriter;
///
/// let mut writer = IndentWriter::new();
/// writeln!(writer, "union() {{").unwrap();
/// {
///     let mut block = writer.indent();
///     writeln!(block, "sphere(r = 1);").unwrap();
/// }
/// writeln!(writer, "}}").unwrap();
/// assert_eq!(writer.contents(), "union() {\n  sphere(r = 1);\n}\n");
/// ```
#[derive(Debug)]
pub struct IndentWriter {
    buffer: String,
    depth: usize,
    width: usize,
    at_line_start: bool,
}

impl IndentWriter {
    /// Creates a writer using the stock indent width.
    pub fn new() -> Self {
        Self::with_width(INDENT_WIDTH)
    }

    /// Creates a writer indenting by `width` spaces per nesting level.
    pub fn with_width(width: usize) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            width,
            at_line_start: true,
        }
    }

    /// Enters a nested block. The returned guard restores the previous depth
    /// when dropped and derefs to the writer so emission continues through it.
    pub fn indent(&mut self) -> IndentBlock<'_> {
        self.depth += 1;
        IndentBlock { writer: self }
    }

    /// Text accumulated so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Consumes the writer and hands back its buffer.
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for IndentWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for IndentWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if ch == '\n' {
                self.buffer.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    let padding = self.depth * self.width;
                    self.buffer.extend(std::iter::repeat(' ').take(padding));
                    self.at_line_start = false;
                }
                self.buffer.push(ch);
            }
        }
        Ok(())
    }
}

/// Scope guard for one level of nesting.
///
/// Created by [`IndentWriter::indent`]; dropping it restores the prior depth.
#[derive(Debug)]
pub struct IndentBlock<'a> {
    writer: &'a mut IndentWriter,
}

impl Deref for IndentBlock<'_> {
    type Target = IndentWriter;

    fn deref(&self) -> &IndentWriter {
        self.writer
    }
}

impl DerefMut for IndentBlock<'_> {
    fn deref_mut(&mut self) -> &mut IndentWriter {
        self.writer
    }
}

impl Drop for IndentBlock<'_> {
    fn drop(&mut self) {
        self.writer.depth = self.writer.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests;
