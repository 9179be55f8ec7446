use std::fmt;

use full_moon::tokenizer::Position as TokenPosition;
use serde::{Deserialize, Serialize};

/// A point in the source. Both fields are 0-based; `column` counts bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A source span, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub begin: Position,
    pub end: Position,
}

impl Location {
    pub fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    /// Smallest span covering both.
    pub fn to(self, other: Location) -> Location {
        Location {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// Byte offset of every line start, for turning parser positions into
/// line/byte-column pairs.
pub(crate) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// `full_moon` lines are 1-based; its byte offsets are absolute.
    pub(crate) fn position(&self, position: TokenPosition) -> Position {
        let line = position.line().saturating_sub(1);
        let start = self.starts.get(line).copied().unwrap_or_default();
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(position.bytes().saturating_sub(start)).unwrap_or(u32::MAX),
        )
    }

    pub(crate) fn location(&self, (begin, end): (TokenPosition, TokenPosition)) -> Location {
        Location::new(self.position(begin), self.position(end))
    }

    /// Position one past the last byte of `source`.
    pub(crate) fn end_of(&self, source: &str) -> Position {
        let line = self.starts.len() - 1;
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(source.len() - self.starts[line]).unwrap_or(u32::MAX),
        )
    }
}
