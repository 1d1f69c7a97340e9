//! Scratch storage for assembling multi-line field values.

/// Initial capacity of a growable scratch buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// How a [`FieldExtractor`](crate::FieldExtractor) stores field values.
#[derive(Debug)]
pub enum BufferConfig<'b> {
    /// An owned buffer that grows as needed, starting at `capacity` bytes.
    Growable {
        /// Bytes to allocate up front.
        capacity: usize,
    },

    /// A caller supplied buffer. Values that do not fit are reported as
    /// [`ErrorKind::BufferExceeded`](crate::ErrorKind::BufferExceeded).
    Fixed(&'b mut [u8]),
}

impl Default for BufferConfig<'_> {
    fn default() -> Self {
        BufferConfig::Growable {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug)]
pub(crate) enum ScratchBuffer<'b> {
    Growable(Vec<u8>),
    Fixed { storage: &'b mut [u8], len: usize },
}

impl<'b> From<BufferConfig<'b>> for ScratchBuffer<'b> {
    fn from(config: BufferConfig<'b>) -> Self {
        match config {
            BufferConfig::Growable { capacity } => {
                ScratchBuffer::Growable(Vec::with_capacity(capacity))
            }
            BufferConfig::Fixed(storage) => ScratchBuffer::Fixed { storage, len: 0 },
        }
    }
}

impl ScratchBuffer<'_> {
    /// Drop the contents, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        match self {
            ScratchBuffer::Growable(v) => v.clear(),
            ScratchBuffer::Fixed { len, .. } => *len = 0,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            ScratchBuffer::Growable(v) => v,
            ScratchBuffer::Fixed { storage, len } => &storage[..*len],
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            ScratchBuffer::Growable(v) => v.capacity(),
            ScratchBuffer::Fixed { storage, .. } => storage.len(),
        }
    }

    /// Append `content`, preceded by a single space if `separator` is set.
    ///
    /// A fixed buffer is left untouched when the result would not fit; the
    /// error holds the index of the first byte of `content` that did not fit.
    pub(crate) fn append(&mut self, separator: bool, content: &[u8]) -> Result<(), usize> {
        match self {
            ScratchBuffer::Growable(v) => {
                if separator {
                    v.push(b' ');
                }
                v.extend_from_slice(content);
                Ok(())
            }
            ScratchBuffer::Fixed { storage, len } => {
                let start = *len + usize::from(separator);
                let end = start + content.len();
                if end > storage.len() {
                    return Err(storage.len().saturating_sub(start));
                }
                if separator {
                    storage[*len] = b' ';
                }
                storage[start..end].copy_from_slice(content);
                *len = end;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growable_append() {
        let mut buffer = ScratchBuffer::from(BufferConfig::Growable { capacity: 2 });
        assert!(buffer.is_empty());
        buffer.append(false, b"short").unwrap();
        buffer.append(true, b"grows").unwrap();
        assert_eq!(buffer.as_bytes(), b"short grows");
        assert!(buffer.capacity() >= 11);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = ScratchBuffer::from(BufferConfig::default());
        buffer.append(false, &[b'x'; 1000]).unwrap();
        let capacity = buffer.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn test_fixed_append() {
        let mut storage = [0u8; 8];
        let mut buffer = ScratchBuffer::from(BufferConfig::Fixed(&mut storage));
        buffer.append(false, b"abc").unwrap();
        buffer.append(true, b"defg").unwrap();
        assert_eq!(buffer.as_bytes(), b"abc defg");
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn test_fixed_overflow_leaves_contents() {
        let mut storage = [0u8; 8];
        let mut buffer = ScratchBuffer::from(BufferConfig::Fixed(&mut storage));
        buffer.append(false, b"abcde").unwrap();
        // "abcde" + " " leaves room for two more bytes.
        assert_eq!(buffer.append(true, b"wxyz"), Err(2));
        assert_eq!(buffer.as_bytes(), b"abcde");

        buffer.clear();
        assert_eq!(buffer.append(false, b"123456789"), Err(8));
        assert!(buffer.is_empty());
    }
}
