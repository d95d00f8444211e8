//! Bounded sequential reader over a transaction buffer.
//!
//! Every field decode in this crate goes through this cursor. Reads are
//! bounds-checked and return errors; no slicing outside the input, no
//! panics on truncated data.
//!
//! # Security
//!
//! The buffer is untrusted host input. A read past the end or a length
//! field that does not fit in 64 bits must surface as a decode error,
//! never as a silent default value.

/// Reader errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// Input ended before a complete value was read.
    UnexpectedEof,
    /// A varint did not fit in 64 bits.
    VarintOverflow,
}

/// Zero-copy cursor over an immutable byte buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of the buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns true if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Result<u8, ReadError> {
        self.data
            .get(self.offset)
            .copied()
            .ok_or(ReadError::UnexpectedEof)
    }

    /// Consumes and returns the next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ReadError::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(ReadError::UnexpectedEof);
        }
        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Consumes and returns all remaining bytes.
    pub fn take_remaining(&mut self) -> &'a [u8] {
        let slice = &self.data[self.offset..];
        self.offset = self.data.len();
        slice
    }

    /// Consumes one byte.
    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let byte = self.peek()?;
        self.offset += 1;
        Ok(byte)
    }

    /// Consumes a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, ReadError> {
        let bytes = self.take(4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(buf))
    }

    /// Consumes a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, ReadError> {
        let bytes = self.take(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    /// Consumes a little-endian i64.
    pub fn read_i64_le(&mut self) -> Result<i64, ReadError> {
        let bytes = self.take(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(buf))
    }

    /// Consumes a 32-byte public key.
    pub fn read_pubkey(&mut self) -> Result<[u8; 32], ReadError> {
        let bytes = self.take(32)?;
        let mut key = [0u8; 32];
        key.copy_from_slice(bytes);
        Ok(key)
    }

    /// Consumes an unsigned LEB128 varint (shortvec length encoding).
    ///
    /// Seven value bits per byte, least significant group first, high bit
    /// as continuation. Values must fit in 64 bits; a truncated or
    /// overlong encoding is an error.
    pub fn read_varint(&mut self) -> Result<u64, ReadError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            // At shift 63 only the lowest bit may still be set, and the
            // encoding must terminate.
            if shift == 63 && byte > 0x01 {
                return Err(ReadError::VarintOverflow);
            }
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift > 63 {
                return Err(ReadError::VarintOverflow);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_and_remaining() {
        let mut reader = Reader::new(&[1, 2, 3, 4, 5]);
        assert_eq!(reader.remaining(), 5);
        assert_eq!(reader.take(2).unwrap(), &[1, 2]);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.take_remaining(), &[3, 4, 5]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_take_past_end() {
        let mut reader = Reader::new(&[1, 2, 3]);
        assert_eq!(reader.take(4), Err(ReadError::UnexpectedEof));
        // A failed take must not advance the cursor
        assert_eq!(reader.take(3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut reader = Reader::new(&[0x42]);
        assert_eq!(reader.peek().unwrap(), 0x42);
        assert_eq!(reader.read_u8().unwrap(), 0x42);
        assert_eq!(reader.peek(), Err(ReadError::UnexpectedEof));
    }

    #[test]
    fn test_fixed_width_le() {
        let mut reader = Reader::new(&[0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]);
        assert_eq!(reader.read_u32_le().unwrap(), 1);
        assert_eq!(reader.read_u64_le().unwrap(), i64::MAX as u64);
    }

    #[test]
    fn test_read_i64_le() {
        let bytes = (-2i64).to_le_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.read_i64_le().unwrap(), -2);
    }

    #[test]
    fn test_varint_single_byte() {
        let mut reader = Reader::new(&[0x00]);
        assert_eq!(reader.read_varint().unwrap(), 0);

        let mut reader = Reader::new(&[0x7f]);
        assert_eq!(reader.read_varint().unwrap(), 0x7f);
    }

    #[test]
    fn test_varint_multi_byte() {
        // 300 = 0b10 0101100 -> 0xAC 0x02
        let mut reader = Reader::new(&[0xac, 0x02]);
        assert_eq!(reader.read_varint().unwrap(), 300);

        // 0xFFFF = 0xFF 0xFF 0x03
        let mut reader = Reader::new(&[0xff, 0xff, 0x03]);
        assert_eq!(reader.read_varint().unwrap(), 0xffff);
    }

    #[test]
    fn test_varint_max_u64() {
        // u64::MAX is ten bytes, last byte 0x01
        let encoded = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        let mut reader = Reader::new(&encoded);
        assert_eq!(reader.read_varint().unwrap(), u64::MAX);
    }

    #[test]
    fn test_varint_overflow() {
        // Tenth byte with bits above the 64-bit boundary
        let encoded = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        let mut reader = Reader::new(&encoded);
        assert_eq!(reader.read_varint(), Err(ReadError::VarintOverflow));

        // Continuation past ten bytes
        let encoded = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00];
        let mut reader = Reader::new(&encoded);
        assert_eq!(reader.read_varint(), Err(ReadError::VarintOverflow));
    }

    #[test]
    fn test_varint_truncated() {
        // Continuation bit set but no next byte
        let mut reader = Reader::new(&[0x80]);
        assert_eq!(reader.read_varint(), Err(ReadError::UnexpectedEof));

        let mut reader = Reader::new(&[0xff, 0xff]);
        assert_eq!(reader.read_varint(), Err(ReadError::UnexpectedEof));
    }

    #[test]
    fn test_read_pubkey() {
        let data = [7u8; 32];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_pubkey().unwrap(), [7u8; 32]);

        let mut reader = Reader::new(&[0u8; 31]);
        assert_eq!(reader.read_pubkey(), Err(ReadError::UnexpectedEof));
    }
}
