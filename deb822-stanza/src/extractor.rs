//! Extraction of `Name: value` fields from a stanza.
//!
//! Field names are borrowed from the input. Values can span several physical
//! lines, so they are joined into a scratch buffer owned by the extractor:
//! every continuation line has its indentation replaced by a single space.
//!
//! ```rust
//! use deb822_stanza::FieldExtractor;
//!
//! let mut extractor = FieldExtractor::new(b"Depends: foo,\n  bar\nSection: net\n");
//! let field = extractor.next_field().unwrap().unwrap();
//! assert_eq!(field.name, b"Depends");
//! assert_eq!(field.value, b"foo, bar");
//! let field = extractor.next_field().unwrap().unwrap();
//! assert_eq!(field.value, b"net");
//! assert!(extractor.next_field().unwrap().is_none());
//! ```

use crate::buffer::{BufferConfig, ScratchBuffer};
use crate::chars::{
    is_field_byte, is_field_start_byte, is_whitespace, COMMENT, NEWLINE, SEPARATOR,
};
use crate::cursor::{Cursor, Location};
use crate::error::{ErrorKind, ParseError};
use crate::splitter::Stanza;

/// A field returned by [`FieldExtractor::next_field`].
///
/// The name borrows the source, the value borrows the extractor's scratch
/// buffer and is only valid until the extractor is advanced or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'s, 'v> {
    /// The field name, with its original casing.
    pub name: &'s [u8],
    /// The value, with continuation lines joined by single spaces.
    pub value: &'v [u8],
}

impl<'s, 'v> Field<'s, 'v> {
    /// The name as a string slice.
    pub fn name_str(&self) -> Result<&'s str, std::str::Utf8Error> {
        std::str::from_utf8(self.name)
    }

    /// The value as a string slice, if it is valid UTF-8.
    pub fn value_str(&self) -> Result<&'v str, std::str::Utf8Error> {
        std::str::from_utf8(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueState {
    /// Reading the rest of a line that belongs to the value.
    Content,
    /// Directly after an empty first line; only an indented line continues
    /// the value.
    EmptyLineStart,
    /// Directly after a line with content; the next line may continue the
    /// value or be a comment.
    LineStart,
}

/// Pulls fields out of a stanza one at a time.
///
/// The same extractor can be pointed at successive stanzas with
/// [`reset`](Self::reset) or [`reset_stanza`](Self::reset_stanza), which keeps
/// the scratch buffer and its allocation.
///
/// An extractor is not meant to be shared: every method that advances it
/// takes `&mut self`.
#[derive(Debug)]
pub struct FieldExtractor<'s, 'b> {
    cursor: Cursor<'s>,
    buffer: ScratchBuffer<'b>,
}

impl<'s> FieldExtractor<'s, 'static> {
    /// Create an extractor with a growable buffer.
    pub fn new(source: &'s [u8]) -> Self {
        Self::with_config(source, BufferConfig::default())
    }
}

impl<'s, 'b> FieldExtractor<'s, 'b> {
    /// Create an extractor storing values as described by `config`.
    pub fn with_config(source: &'s [u8], config: BufferConfig<'b>) -> Self {
        Self {
            cursor: Cursor::new(source),
            buffer: config.into(),
        }
    }

    /// Start over on `source`.
    pub fn reset(&mut self, source: &'s [u8]) {
        self.cursor = Cursor::new(source);
        self.buffer.clear();
    }

    /// Start over on `stanza`, reporting locations relative to the document
    /// the stanza was split from.
    pub fn reset_stanza(&mut self, stanza: &Stanza<'s>) {
        self.cursor = Cursor::with_origin(stanza.as_bytes(), stanza.location());
        self.buffer.clear();
    }

    /// The position of the next byte to be read.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Current capacity of the scratch buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Return the next field, or `None` when the input is used up.
    ///
    /// On error the offending line (or, for
    /// [`ErrorKind::BufferExceeded`], the whole oversized field) has been
    /// consumed and the next call continues after it.
    pub fn next_field(&mut self) -> Result<Option<Field<'s, '_>>, ParseError<'s>> {
        self.buffer.clear();
        let Some(name) = self.scan_name()? else {
            return Ok(None);
        };
        if let Some(err) = self.scan_value() {
            log::debug!("dropping value of {:?}: {}", String::from_utf8_lossy(name), err);
            return Err(err);
        }
        let value = self.buffer.as_bytes();
        log::trace!(
            "field {:?} ({} bytes)",
            String::from_utf8_lossy(name),
            value.len()
        );
        Ok(Some(Field { name, value }))
    }

    fn scan_name(&mut self) -> Result<Option<&'s [u8]>, ParseError<'s>> {
        loop {
            match self.cursor.peek() {
                None => return Ok(None),
                Some(NEWLINE) | Some(COMMENT) => self.cursor.skip_line(),
                Some(b) if is_field_start_byte(b) => break,
                Some(_) => return Err(self.reject(ErrorKind::InvalidName)),
            }
        }

        let start = self.cursor.pos();
        let mut end = start;
        loop {
            match self.cursor.peek() {
                Some(SEPARATOR) => {
                    self.cursor.bump();
                    return Ok(Some(self.cursor.slice(start, end)));
                }
                Some(b) if is_whitespace(b) => {
                    self.cursor.bump();
                }
                // Once whitespace has been seen only the separator may follow.
                Some(b) if is_field_byte(b) && end == self.cursor.pos() => {
                    self.cursor.bump();
                    end = self.cursor.pos();
                }
                _ => return Err(self.reject(ErrorKind::InvalidDefinition)),
            }
        }
    }

    /// Join the value into the scratch buffer. Returns the error for the
    /// first byte that did not fit, after consuming the rest of the field.
    fn scan_value(&mut self) -> Option<ParseError<'s>> {
        let mut overflow = None;
        let mut state = ValueState::Content;
        let mut continuation = false;
        self.cursor.skip_whitespace();

        loop {
            match state {
                ValueState::Content => {
                    let location = self.cursor.location();
                    let content = self.cursor.take_line();
                    if overflow.is_none() {
                        overflow = self.append(continuation, content, location);
                    }
                    if self.cursor.bump().is_none() {
                        break;
                    }
                    state = if !continuation && content.is_empty() {
                        ValueState::EmptyLineStart
                    } else {
                        ValueState::LineStart
                    };
                    continuation = true;
                }
                ValueState::EmptyLineStart => match self.cursor.peek() {
                    Some(b) if is_whitespace(b) => {
                        self.cursor.skip_whitespace();
                        state = ValueState::Content;
                    }
                    _ => break,
                },
                ValueState::LineStart => match self.cursor.peek() {
                    Some(b) if is_whitespace(b) => {
                        self.cursor.skip_whitespace();
                        state = ValueState::Content;
                    }
                    // Only unindented comments are dropped; the value may
                    // still continue on the line after.
                    Some(COMMENT) => self.cursor.skip_line(),
                    _ => break,
                },
            }
        }

        overflow
    }

    /// Append one line of the value. Every continuation line is preceded by
    /// a single space, even when its content is empty.
    fn append(
        &mut self,
        continuation: bool,
        content: &'s [u8],
        location: Location,
    ) -> Option<ParseError<'s>> {
        if !continuation && content.is_empty() {
            return None;
        }
        let fitted = self.buffer.append(continuation, content).err()?;
        // Only the joining space overflowed a whitespace-only line.
        let offender = content
            .get(fitted..fitted + 1)
            .unwrap_or_else(|| self.cursor.offender());
        Some(ParseError::new(
            ErrorKind::BufferExceeded,
            offender,
            Location {
                offset: location.offset + fitted,
                line: location.line,
                column: location.column + fitted,
            },
        ))
    }

    fn reject(&mut self, kind: ErrorKind) -> ParseError<'s> {
        let err = ParseError::new(kind, self.cursor.offender(), self.cursor.location());
        self.cursor.skip_line();
        log::debug!("skipping line: {}", err);
        err
    }
}
