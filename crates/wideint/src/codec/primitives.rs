//! Cursor primitives for the fixed-width little-endian format.
//!
//! Both cursors borrow a caller-owned buffer and never allocate.

use crate::error::{DecodeError, EncodeError};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading lanes
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Fails unless at least `n` bytes remain.
    ///
    /// Callers check the full width of a value up front so that a short
    /// buffer is reported before any lane is consumed.
    #[inline]
    pub fn require(&self, n: usize, type_name: &'static str) -> Result<(), DecodeError> {
        let actual = self.remaining_len();
        if actual < n {
            return Err(DecodeError::BufferTooShort {
                type_name,
                needed: n,
                actual,
            });
        }
        Ok(())
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(
        &mut self,
        n: usize,
        type_name: &'static str,
    ) -> Result<&'a [u8], DecodeError> {
        self.require(n, type_name)?;
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads one little-endian 64-bit lane.
    #[inline]
    pub fn read_u64(&mut self, type_name: &'static str) -> Result<u64, DecodeError> {
        let bytes = self.read_bytes(8, type_name)?;
        let mut lane = [0u8; 8];
        lane.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(lane))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding into a caller-supplied buffer.
///
/// Bytes past the written region are left untouched.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    /// Creates a new writer over `buf`, starting at offset 0.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes still available.
    pub fn remaining_len(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Fails unless at least `n` bytes of space remain.
    #[inline]
    pub fn require(&self, n: usize, type_name: &'static str) -> Result<(), EncodeError> {
        let actual = self.remaining_len();
        if actual < n {
            return Err(EncodeError::BufferTooShort {
                type_name,
                needed: n,
                actual,
            });
        }
        Ok(())
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(
        &mut self,
        bytes: &[u8],
        type_name: &'static str,
    ) -> Result<(), EncodeError> {
        self.require(bytes.len(), type_name)?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Writes one little-endian 64-bit lane.
    #[inline]
    pub fn write_u64(&mut self, value: u64, type_name: &'static str) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes(), type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_roundtrip() {
        let test_values = [0u64, 1, 127, 128, 0xDEADBEEFCAFEBABE, u64::MAX];

        for v in test_values {
            let mut buf = [0u8; 8];
            let mut writer = Writer::new(&mut buf);
            writer.write_u64(v, "test").unwrap();
            assert_eq!(writer.position(), 8);
            assert_eq!(writer.written(), &v.to_le_bytes());

            let mut reader = Reader::new(&buf);
            let decoded = reader.read_u64("test").unwrap();
            assert_eq!(v, decoded, "failed for {}", v);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_u64_is_little_endian() {
        let mut buf = [0u8; 8];
        Writer::new(&mut buf)
            .write_u64(0x0102_0304_0506_0708, "test")
            .unwrap();
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let result = reader.read_u64("test");
        assert_eq!(
            result,
            Err(DecodeError::BufferTooShort {
                type_name: "test",
                needed: 8,
                actual: 5
            })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_write_overflow_leaves_buffer() {
        let mut buf = [0xAAu8; 4];
        let mut writer = Writer::new(&mut buf);
        let result = writer.write_u64(1, "test");
        assert!(matches!(
            result,
            Err(EncodeError::BufferTooShort {
                needed: 8,
                actual: 4,
                ..
            })
        ));
        assert_eq!(writer.position(), 0);
        assert_eq!(buf, [0xAA; 4]);
    }

    #[test]
    fn test_remaining() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut reader = Reader::new(&data);
        reader.read_u64("test").unwrap();
        assert_eq!(reader.remaining(), &[9, 10]);
        assert_eq!(reader.remaining_len(), 2);
    }
}
