//! Error types for svgelm

use std::fmt;
use thiserror::Error;

/// Position in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Malformed-markup categories
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No `<svg>`-style root element could be found
    MissingRoot,
    /// Non-whitespace input after the root element closed
    TrailingContent,
    /// A closing tag with no matching open element
    UnexpectedClosingTag,
    /// A closing tag that does not match the innermost open element
    MismatchedClosingTag { expected: String, found: String },
    /// Input ended while an element was still open
    UnterminatedElement,
    /// Input ended inside a comment, prolog, or doctype
    UnterminatedMarkup,
    /// Attribute value not wrapped in quotes
    ExpectedQuotedValue,
    /// Input ended inside a quoted attribute value
    UnterminatedAttributeValue,
    /// The same attribute name appears twice on one element
    DuplicateAttribute { name: String },
    /// Tag or attribute name starts with an illegal byte
    InvalidName,
    /// Unknown or malformed `&...;` entity
    InvalidEntity,
    /// Markup bytes are not valid UTF-8
    InvalidUtf8,
    /// Any other byte out of place
    UnexpectedToken,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => write!(f, "no root element found"),
            Self::TrailingContent => write!(f, "content after root element"),
            Self::UnexpectedClosingTag => write!(f, "unexpected closing tag"),
            Self::MismatchedClosingTag { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            Self::UnterminatedElement => write!(f, "unterminated element"),
            Self::UnterminatedMarkup => write!(f, "unterminated markup"),
            Self::ExpectedQuotedValue => write!(f, "expected quoted attribute value"),
            Self::UnterminatedAttributeValue => write!(f, "unterminated attribute value"),
            Self::DuplicateAttribute { name } => write!(f, "duplicate attribute: {name}"),
            Self::InvalidName => write!(f, "invalid name"),
            Self::InvalidEntity => write!(f, "invalid entity"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
        }
    }
}

/// Main error type for svgelm
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::new(pos, pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for svgelm
pub type Result<T> = std::result::Result<T, Error>;
