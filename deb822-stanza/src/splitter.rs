//! Splitting of a deb822 document into stanzas.
//!
//! The splitter does not look inside fields: it only knows about line
//! starts, blank lines and comments. Every stanza it returns is a slice of the
//! original input, so no string data is copied.
//!
//! ```rust
//! use deb822_stanza::StanzaSplitter;
//!
//! let input = b"Package: foo\n\n\nPackage: bar\n";
//! let mut splitter = StanzaSplitter::new(input);
//! assert_eq!(splitter.next_stanza().unwrap().unwrap().as_bytes(), b"Package: foo\n");
//! assert_eq!(splitter.next_stanza().unwrap().unwrap().as_bytes(), b"Package: bar\n");
//! assert!(splitter.next_stanza().unwrap().is_none());
//! ```

use crate::chars::{COMMENT, NEWLINE};
use crate::cursor::{Cursor, Location};
use crate::error::{ErrorKind, ParseError};

/// A stanza borrowed from the source.
///
/// Dereferences to the raw bytes of the stanza, which include the newline
/// ending its last line but not the blank line separating it from the next
/// stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stanza<'a> {
    text: &'a [u8],
    location: Location,
}

impl<'a> Stanza<'a> {
    /// The raw bytes of the stanza.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// Where the stanza starts in the source.
    pub fn location(&self) -> Location {
        self.location
    }
}

impl std::ops::Deref for Stanza<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.text
    }
}

impl AsRef<[u8]> for Stanza<'_> {
    fn as_ref(&self) -> &[u8] {
        self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping blank lines and comments before the first field.
    Start,
    /// Inside a line belonging to the stanza.
    Field,
    /// Directly after a newline inside the stanza.
    LineStart,
}

/// Splits a document into stanzas.
///
/// The splitter is bound to one source. Once it has returned `Ok(None)` it
/// keeps doing so.
#[derive(Debug, Clone)]
pub struct StanzaSplitter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> StanzaSplitter<'a> {
    /// Create a new splitter over `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The position of the next byte to be read.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Return the next stanza, or `None` if there are no stanzas left.
    ///
    /// A stanza that would start with `-` is reported as
    /// [`ErrorKind::InvalidFieldName`]; the offending line is skipped so the
    /// next call carries on after it.
    pub fn next_stanza(&mut self) -> Result<Option<Stanza<'a>>, ParseError<'a>> {
        let mut state = State::Start;
        let mut start = self.cursor.pos();
        let mut location = self.cursor.location();

        while let Some(b) = self.cursor.peek() {
            match state {
                State::Start => match b {
                    NEWLINE | COMMENT => {
                        self.cursor.skip_line();
                        start = self.cursor.pos();
                        location = self.cursor.location();
                    }
                    b'-' => {
                        let err = ParseError::new(
                            ErrorKind::InvalidFieldName,
                            self.cursor.offender(),
                            self.cursor.location(),
                        );
                        self.cursor.skip_line();
                        log::debug!("skipping stanza line: {}", err);
                        return Err(err);
                    }
                    _ => state = State::Field,
                },
                State::Field => {
                    self.cursor.take_line();
                    self.cursor.bump();
                    state = State::LineStart;
                }
                State::LineStart => match b {
                    NEWLINE => {
                        let text = self.cursor.slice(start, self.cursor.pos());
                        self.cursor.bump();
                        return Ok(Some(self.emit(text, location)));
                    }
                    COMMENT => self.cursor.skip_line(),
                    _ => state = State::Field,
                },
            }
        }

        if state == State::Start {
            return Ok(None);
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        Ok(Some(self.emit(text, location)))
    }

    fn emit(&self, text: &'a [u8], location: Location) -> Stanza<'a> {
        log::trace!("stanza at {} ({} bytes)", location, text.len());
        Stanza { text, location }
    }
}

impl<'a> Iterator for StanzaSplitter<'a> {
    type Item = Result<Stanza<'a>, ParseError<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_stanza().transpose()
    }
}

impl std::iter::FusedIterator for StanzaSplitter<'_> {}
