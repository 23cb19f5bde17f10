//! Source positions and spans attached to tokens and AST nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the source text.
///
/// `offset` is a 0-based byte offset; `line` and `column` are 1-based and
/// count characters, so multi-byte UTF-8 characters advance the column by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of any source.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Step over `c`, moving to the next line on `\n`.
    pub(crate) fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A half-open span `[start, end)` within a named source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub source: String,
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(source: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            source: source.into(),
            start,
            end,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `position` falls inside this span.
    pub fn contains(&self, position: Position) -> bool {
        self.start.offset <= position.offset && position.offset < self.end.offset
    }

    /// The slice of `source` this span covers, if the offsets are valid for it.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start.offset..self.end.offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source, self.start.line, self.start.column
        )
    }
}
