//! Byte spans and line/column mapping for lint reporting.

use serde::{Deserialize, Serialize};

/// A range of text within a source string.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Span {
    /// The byte offset of the first byte of the span.
    pub start: usize,
    /// The byte offset after the last byte of the span.
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Returns true if this span covers no text.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// The length of the span, in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Converts the span into a range that can be used for string indexing.
    #[inline]
    pub fn into_range(self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// A human-oriented position within a source string.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineCol {
    /// The line number.
    pub line: usize,
    /// The column number.
    pub column: usize,
}

/// A lookup table from byte offsets to line/column positions.
///
/// Parsing never needs one; build one per source string when presenting
/// warning spans to a human.
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    /// The source string the offsets refer to.
    source: &'a str,
    /// Byte positions of line beginnings.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Indexes the line boundaries of `source`.
    pub fn new(source: &'a str) -> Self {
        let line_starts = core::iter::once(0)
            .chain(source.match_indices('\n').map(|(pos, _)| pos + 1))
            .collect();

        Self {
            source,
            line_starts,
        }
    }

    /// Gets the line and column of a byte offset.
    ///
    /// # Panics
    ///
    /// * If `pos` is past the end of the source
    /// * If `pos` points to a byte in the middle of a UTF-8 character
    pub fn line_col(&self, pos: usize) -> LineCol {
        assert!(pos <= self.source.len());
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let column = self.source[self.line_starts[line]..pos].chars().count();

        LineCol {
            line: line + 1,
            column: column + 1,
        }
    }
}
