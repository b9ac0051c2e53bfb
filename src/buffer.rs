use crate::error::JsonTidyError;

const INITIAL_CAPACITY: usize = 256;

/// Growable output buffer for the scanner.
///
/// Capacity doubles on demand through `try_reserve`, so exhaustion comes
/// back as [`JsonTidyError::OutOfMemory`] instead of aborting the process.
#[derive(Debug, Default)]
pub(crate) struct TextBuffer {
    bytes: Vec<u8>,
}

impl TextBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), JsonTidyError> {
        if self.bytes.len() == self.bytes.capacity() {
            let grow_by = self.bytes.capacity().max(INITIAL_CAPACITY);
            self.bytes.try_reserve(grow_by)?;
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// Appends `count` spaces.
    pub(crate) fn pad(&mut self, count: usize) -> Result<(), JsonTidyError> {
        for _ in 0..count {
            self.push(b' ')?;
        }
        Ok(())
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let buf = TextBuffer::new();
        assert!(buf.into_bytes().is_empty());
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut buf = TextBuffer::new();
        for _ in 0..INITIAL_CAPACITY * 4 {
            buf.push(b'x').unwrap();
        }
        let bytes = buf.into_bytes();
        assert_eq!(bytes.len(), INITIAL_CAPACITY * 4);
        assert!(bytes.iter().all(|&b| b == b'x'));
    }

    #[test]
    fn pad_appends_spaces_only() {
        let mut buf = TextBuffer::new();
        buf.push(b'a').unwrap();
        buf.pad(4).unwrap();
        buf.push(b'b').unwrap();
        assert_eq!(buf.into_bytes(), b"a    b");
    }
}
