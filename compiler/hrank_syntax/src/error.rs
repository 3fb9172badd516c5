//! Syntax errors.

use std::fmt;

use thiserror::Error;

/// Byte range in the source text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Empty span at `offset`.
    pub fn point(offset: usize) -> Self {
        Span::new(offset, offset)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid character {text:?} at {span}")]
    InvalidCharacter { text: String, span: Span },

    #[error("unexpected {found} at {span}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unclosed '{open}' at {span}")]
    Unclosed { open: &'static str, span: Span },

    #[error("unexpected {found} at {span} after the end of the input")]
    TrailingInput { found: String, span: Span },
}

impl SyntaxError {
    /// Where the error was found, if it points at source text.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidCharacter { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::Unclosed { span, .. }
            | Self::TrailingInput { span, .. } => Some(*span),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}
