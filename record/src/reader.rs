//! Bounded little-endian byte cursor.

/// A read cursor over a byte slice.
///
/// Reads are bounds-checked and return `None` when fewer bytes remain than
/// requested; the position is left unchanged in that case. Record-level
/// decoders turn that into a [`DecodeError`](crate::DecodeError) with the
/// offset of the record being read.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> Option<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `f32`.
    pub fn read_f32(&mut self) -> Option<f32> {
        self.read_array::<4>().map(f32::from_le_bytes)
    }

    /// Reads `count` little-endian `i32` values.
    pub fn read_i32_vec(&mut self, count: usize) -> Option<Vec<i32>> {
        let len = count.checked_mul(4)?;
        if len > self.remaining() {
            return None;
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Some(
            bytes
                .chunks_exact(4)
                .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                .collect(),
        )
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        if N > self.remaining() {
            return None;
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Some(out)
    }
}
