//! Byte classes used by the stanza splitter and the field extractor.

/// Line terminator.
pub const NEWLINE: u8 = b'\n';

/// Introduces a comment line when it appears at the start of a line.
pub const COMMENT: u8 = b'#';

/// Separates a field name from its value.
pub const SEPARATOR: u8 = b':';

/// Check whether `b` may appear anywhere in a field name.
///
/// This is printable ASCII without space and without the `:` separator.
#[inline]
pub fn is_field_byte(b: u8) -> bool {
    matches!(b, 0x21..=0x39 | 0x3B..=0x7E)
}

/// Check whether `b` may start a field name.
///
/// `#` would start a comment and `-` is reserved, but both are allowed
/// after the first byte.
#[inline]
pub fn is_field_start_byte(b: u8) -> bool {
    is_field_byte(b) && b != COMMENT && b != b'-'
}

/// Check whether `b` is horizontal whitespace (space or tab).
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_byte_ranges() {
        assert!(is_field_byte(b'!'));
        assert!(is_field_byte(b'9'));
        assert!(!is_field_byte(b':'));
        assert!(is_field_byte(b';'));
        assert!(is_field_byte(b'~'));
        assert!(!is_field_byte(0x7F));
        assert!(!is_field_byte(b' '));
        assert!(!is_field_byte(b'\t'));
        assert!(!is_field_byte(b'\n'));
        assert!(!is_field_byte(0xC3));
    }

    #[test]
    fn test_field_start_byte() {
        assert!(is_field_start_byte(b'P'));
        assert!(is_field_start_byte(b'x'));
        assert!(!is_field_start_byte(b'#'));
        assert!(!is_field_start_byte(b'-'));
        assert!(!is_field_start_byte(b':'));
        assert!(!is_field_start_byte(b' '));

        // Legal after the first byte.
        assert!(is_field_byte(b'#'));
        assert!(is_field_byte(b'-'));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(!is_whitespace(b'\n'));
        assert!(!is_whitespace(b'\r'));
        assert!(!is_whitespace(b'a'));
    }
}
