//! Little-endian byte writer for record encoding.

/// Accumulates encoded record bytes.
///
/// Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes every value of `values` as a little-endian `i32`.
    pub fn write_i32_slice(&mut self, values: &[i32]) {
        self.bytes.reserve(values.len() * 4);
        for &value in values {
            self.write_i32(value);
        }
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn write_i32_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_i32(0x1234_5678);
        writer.write_i32(-1);
        assert_eq!(writer.len(), 8);
        assert_eq!(
            writer.finish(),
            vec![0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn write_f32_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_f32(1.0);
        // 1.0f32 = 0x3F80_0000
        assert_eq!(writer.finish(), vec![0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn write_i32_slice() {
        let mut writer = ByteWriter::with_capacity(8);
        writer.write_i32_slice(&[1, 2]);
        assert_eq!(writer.finish(), vec![1, 0, 0, 0, 2, 0, 0, 0]);
    }
}
