//! Zero-copy parsing of deb822 style files.
//!
//! Parsing happens in two stages that the caller drives:
//!
//! 1. [`StanzaSplitter`] cuts the input into stanzas (paragraphs), returning
//!    slices of the input.
//! 2. [`FieldExtractor`] pulls `Name: value` fields out of a stanza. Names are
//!    slices of the input, values are assembled in a reusable scratch buffer
//!    because continuation lines have to be joined.
//!
//! ```rust
//! use deb822_stanza::{FieldExtractor, StanzaSplitter};
//!
//! let input = b"Package: hello\nDescription: greets\n the world\n\nPackage: bye\n";
//! let mut extractor = FieldExtractor::new(b"");
//! let mut names = Vec::new();
//! for stanza in StanzaSplitter::new(input) {
//!     extractor.reset_stanza(&stanza.unwrap());
//!     while let Some(field) = extractor.next_field().unwrap() {
//!         if field.name == b"Description" {
//!             assert_eq!(field.value, b"greets the world");
//!         }
//!         names.push(field.name);
//!     }
//! }
//! assert_eq!(names, vec![&b"Package"[..], b"Description", b"Package"]);
//! ```
//!
//! The owned [`Deb822`] and [`Paragraph`] types collect everything at once
//! for callers that don't care about allocations.
//!
//! Errors carry the offending byte and its line and column. Both parsers
//! move past the offending line, so a caller can report an error and keep
//! going.

mod buffer;
pub mod chars;
mod cursor;
mod error;
mod extractor;
mod splitter;

pub use buffer::{BufferConfig, DEFAULT_CAPACITY};
pub use cursor::Location;
pub use error::{ErrorKind, ParseError, SyntaxError};
pub use extractor::{Field, FieldExtractor};
pub use splitter::{Stanza, StanzaSplitter};

/// Error type for the owned parsing API.
#[derive(Debug)]
pub enum Error {
    /// The input is malformed.
    Syntax(SyntaxError),

    /// IO error.
    Io(std::io::Error),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<ParseError<'_>> for Error {
    fn from(e: ParseError<'_>) -> Self {
        Self::Syntax(e.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

/// A field in a deb822 paragraph.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry {
    /// The name of the field.
    pub name: Vec<u8>,

    /// The value of the field, continuation lines joined by spaces.
    pub value: Vec<u8>,
}

impl From<Field<'_, '_>> for Entry {
    fn from(field: Field<'_, '_>) -> Self {
        Entry {
            name: field.name.to_vec(),
            value: field.value.to_vec(),
        }
    }
}

/// A deb822 paragraph.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Paragraph {
    /// Fields in the paragraph, in input order.
    pub fields: Vec<Entry>,
}

impl Paragraph {
    /// Collect the remaining fields of `extractor`.
    pub fn from_extractor(extractor: &mut FieldExtractor<'_, '_>) -> Result<Self, Error> {
        let mut fields = Vec::new();
        while let Some(field) = extractor.next_field()? {
            fields.push(field.into());
        }
        Ok(Paragraph { fields })
    }

    /// Get the value of a field by name.
    ///
    /// Field names are compared ASCII case-insensitively. If the field occurs
    /// more than once, the first occurrence wins.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name.as_bytes()))
            .map(|field| field.value.as_slice())
    }

    /// Get the value of a field as a string slice.
    ///
    /// Returns `None` if the field is missing or not valid UTF-8.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Get the values of all fields called `name`.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.name.eq_ignore_ascii_case(name.as_bytes()))
            .map(|field| field.value.as_slice())
    }

    /// Check whether the paragraph has a field called `name`.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over the field names, with their original casing.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.fields.iter().map(|field| field.name.as_slice())
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Return the number of fields in the paragraph.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over the fields in the paragraph.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.fields
            .iter()
            .map(|field| (field.name.as_slice(), field.value.as_slice()))
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = String::from_utf8_lossy(&self.name);
        let value = String::from_utf8_lossy(&self.value);
        if self.value.is_empty() {
            writeln!(f, "{}:", name)
        } else if self.value.starts_with(b" ") {
            // A value joined onto an empty first line.
            writeln!(f, "{}:\n{}", name, value)
        } else {
            writeln!(f, "{}: {}", name, value)
        }
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for field in &self.fields {
            field.fmt(f)?;
        }
        Ok(())
    }
}

impl FromIterator<(Vec<u8>, Vec<u8>)> for Paragraph {
    fn from_iter<T: IntoIterator<Item = (Vec<u8>, Vec<u8>)>>(iter: T) -> Self {
        let fields = iter
            .into_iter()
            .map(|(name, value)| Entry { name, value })
            .collect();
        Paragraph { fields }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Paragraph {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(name, value)| (name.as_bytes().to_vec(), value.as_bytes().to_vec()))
            .collect()
    }
}

impl IntoIterator for Paragraph {
    type Item = (Vec<u8>, Vec<u8>);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Entry>, fn(Entry) -> (Vec<u8>, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields
            .into_iter()
            .map(|field| (field.name, field.value))
    }
}

/// A deb822 document.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Deb822(Vec<Paragraph>);

impl From<Deb822> for Vec<Paragraph> {
    fn from(doc: Deb822) -> Self {
        doc.0
    }
}

impl From<Vec<Paragraph>> for Deb822 {
    fn from(paragraphs: Vec<Paragraph>) -> Self {
        Deb822(paragraphs)
    }
}

impl IntoIterator for Deb822 {
    type Item = Paragraph;
    type IntoIter = std::vec::IntoIter<Paragraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Deb822 {
    /// Parse a complete document.
    ///
    /// Stops at the first malformed stanza or field.
    pub fn parse(input: &[u8]) -> Result<Self, Error> {
        let mut extractor = FieldExtractor::new(b"");
        let mut paragraphs = Vec::new();
        for stanza in StanzaSplitter::new(input) {
            extractor.reset_stanza(&stanza?);
            paragraphs.push(Paragraph::from_extractor(&mut extractor)?);
        }
        Ok(Deb822(paragraphs))
    }

    /// Read from a reader.
    pub fn from_reader<R: std::io::Read>(mut r: R) -> Result<Self, Error> {
        let mut buf = Vec::new();
        r.read_to_end(&mut buf)?;
        Self::parse(&buf)
    }

    /// Number of paragraphs in the document.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the paragraphs in the document.
    pub fn iter(&self) -> impl Iterator<Item = &Paragraph> {
        self.0.iter()
    }
}

impl std::fmt::Display for Deb822 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, paragraph) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", paragraph)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Deb822 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Paragraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for field in &self.fields {
            map.serialize_entry(
                &String::from_utf8_lossy(&field.name),
                &String::from_utf8_lossy(&field.value),
            )?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Deb822 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
