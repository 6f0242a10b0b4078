//! Byte-level writer for encoding binary data.

use crate::tags::Tag;

/// A growable byte buffer with fixed-width, host-order writes and support for
/// patching a previously written position.
///
/// Multi-byte values are written in host byte order, matching the endianness
/// marker the message header carries. The patch operation exists for the
/// message length field, which is only known once the payload has been
/// appended.
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new `ByteWriter` with an empty buffer.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates a new `ByteWriter` with a pre-allocated buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Writes a wire type tag.
    pub fn put_tag(&mut self, tag: Tag) {
        self.buffer.push(tag as u8);
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buffer.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buffer.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn put_f64(&mut self, value: f64) {
        self.buffer.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Overwrites 4 bytes at `offset` with `value`.
    ///
    /// The offset range must already have been written; the framer uses this
    /// to patch the message length placeholder at a fixed header offset.
    pub fn patch_i32(&mut self, offset: usize, value: i32) {
        self.buffer[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
    }

    /// Returns the current size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finishes writing and returns the complete buffer.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_single_bytes() {
        let mut writer = ByteWriter::new();
        writer.put_u8(0xAB);
        writer.put_tag(-6);
        assert_eq!(writer.finish(), vec![0xAB, 0xFA]);
    }

    #[test]
    fn test_put_fixed_widths() {
        let mut writer = ByteWriter::new();
        writer.put_i16(0x0102);
        writer.put_i32(0x03040506);
        writer.put_i64(1);
        let buffer = writer.finish();
        assert_eq!(buffer.len(), 14);
        if cfg!(target_endian = "little") {
            assert_eq!(&buffer[..2], &[0x02, 0x01]);
            assert_eq!(&buffer[2..6], &[0x06, 0x05, 0x04, 0x03]);
            assert_eq!(&buffer[6..], &[1, 0, 0, 0, 0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_put_floats() {
        let mut writer = ByteWriter::new();
        writer.put_f32(1.5);
        writer.put_f64(2.5);
        let buffer = writer.finish();
        assert_eq!(&buffer[..4], &1.5f32.to_ne_bytes());
        assert_eq!(&buffer[4..], &2.5f64.to_ne_bytes());
    }

    #[test]
    fn test_patch_i32() {
        let mut writer = ByteWriter::new();
        writer.put_bytes(&[0, 0, 0, 0, 0, 0]);
        writer.patch_i32(1, 0x11223344);
        let buffer = writer.finish();
        assert_eq!(buffer[0], 0);
        assert_eq!(buffer[5], 0);
        assert_eq!(&buffer[1..5], &0x11223344i32.to_ne_bytes());
    }

    #[test]
    fn test_empty() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
    }
}
