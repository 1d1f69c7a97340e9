//! Position tracking shared by the splitter and the extractor.

use crate::chars::{is_whitespace, NEWLINE};

/// A position in the parsed source.
///
/// `line` is 1-based, `column` is 0-based and counts bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column within the line, starting at 0.
    pub column: usize,
}

impl Location {
    /// The first byte of a source.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 0,
    };
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Forward-only cursor over a byte slice with a single byte of lookahead.
///
/// Both state machines decide on a byte by peeking at it first and only
/// consume it once it is known to belong to the current token, so the cursor
/// never has to move backwards.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
    origin: Location,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a [u8]) -> Self {
        Self::with_origin(src, Location::START)
    }

    /// Create a cursor whose reported locations start at `origin` rather than
    /// at the beginning of a document.
    pub(crate) fn with_origin(src: &'a [u8], origin: Location) -> Self {
        Self {
            src,
            pos: 0,
            origin,
            line: origin.line,
            column: origin.column,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn location(&self) -> Location {
        Location {
            offset: self.origin.offset + self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Consume one byte.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == NEWLINE {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// The byte under the cursor as a one byte slice of the source, or the
    /// empty slice at the end of the source.
    pub(crate) fn offender(&self) -> &'a [u8] {
        let end = (self.pos + 1).min(self.src.len());
        &self.src[self.pos..end]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.src[start..end]
    }

    /// Consume bytes up to, but not including, the next newline.
    pub(crate) fn take_line(&mut self) -> &'a [u8] {
        let start = self.pos;
        let len = self.src[start..]
            .iter()
            .position(|&b| b == NEWLINE)
            .unwrap_or(self.src.len() - start);
        self.pos += len;
        self.column += len;
        &self.src[start..self.pos]
    }

    /// Consume the rest of the current line including its newline.
    pub(crate) fn skip_line(&mut self) {
        self.take_line();
        self.bump();
    }

    /// Consume spaces and tabs.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }
}
