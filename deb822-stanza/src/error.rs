//! Errors reported while splitting stanzas and extracting fields.
//!
//! Running out of input is not an error: both parsers signal it with
//! `Ok(None)`. Everything here carries the location of the offending byte,
//! and the parser that reported it has already moved past the problem, so
//! calling it again continues with the following line.

use crate::cursor::Location;

/// The kind of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A stanza starts with a byte that can not start a field name.
    InvalidFieldName,

    /// A field starts with a byte that can not start a field name.
    InvalidName,

    /// A line is neither blank, a comment nor a `Name: value` definition.
    InvalidDefinition,

    /// A value does not fit in a fixed capacity scratch buffer.
    BufferExceeded,
}

impl ErrorKind {
    /// Small integer code for this kind, for callers on the other side of a
    /// foreign function boundary.
    ///
    /// `0` is never returned; it is left for "no more items".
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::InvalidFieldName => 1,
            ErrorKind::InvalidName => 2,
            ErrorKind::InvalidDefinition => 3,
            ErrorKind::BufferExceeded => 4,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidFieldName => "invalid field name",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::InvalidDefinition => "invalid field definition",
            ErrorKind::BufferExceeded => "value exceeds buffer capacity",
        })
    }
}

/// A parse error borrowing the offending byte from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError<'a> {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The offending byte as a one byte slice of the source. Empty when the
    /// problem is the end of the input itself.
    pub offender: &'a [u8],
    /// Where the offending byte is.
    pub location: Location,
}

impl<'a> ParseError<'a> {
    pub(crate) fn new(kind: ErrorKind, offender: &'a [u8], location: Location) -> Self {
        Self {
            kind,
            offender,
            location,
        }
    }

    /// Line of the offending byte, starting at 1.
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// Column of the offending byte, starting at 0.
    pub fn column(&self) -> usize {
        self.location.column
    }

    /// Copy into an error that does not borrow the source.
    pub fn to_owned_error(&self) -> SyntaxError {
        SyntaxError {
            kind: self.kind,
            offender: self.offender.first().copied(),
            location: self.location,
        }
    }
}

fn fmt_error(
    f: &mut std::fmt::Formatter<'_>,
    kind: ErrorKind,
    offender: Option<u8>,
    location: Location,
) -> std::fmt::Result {
    match offender {
        Some(b) => write!(
            f,
            "{} at {}: '{}'",
            kind,
            location,
            std::ascii::escape_default(b)
        ),
        None => write!(f, "{} at {}: unexpected end of input", kind, location),
    }
}

impl std::fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_error(f, self.kind, self.offender.first().copied(), self.location)
    }
}

impl std::error::Error for ParseError<'_> {}

/// A parse error that owns its offending byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The offending byte, `None` at the end of the input.
    pub offender: Option<u8>,
    /// Where the offending byte is.
    pub location: Location,
}

impl From<ParseError<'_>> for SyntaxError {
    fn from(e: ParseError<'_>) -> Self {
        e.to_owned_error()
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_error(f, self.kind, self.offender, self.location)
    }
}

impl std::error::Error for SyntaxError {}
