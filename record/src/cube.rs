//! Fixed-size cube records written by the generator.

use crate::error::{DecodeError, LimitKind, RecordResult};
use crate::limits::Limits;
use crate::reader::ByteReader;
use crate::vec3::Vec3f;
use crate::writer::ByteWriter;

/// Encoded size of one cube record in bytes (3 x f32, 1 x i32, 8 x i32).
pub const CUBE_RECORD_SIZE: usize = 3 * 4 + 4 + CORNER_COUNT * 4;

/// Number of corners, and therefore scalar ids, of a cube.
pub const CORNER_COUNT: usize = 8;

/// File extension of cube level files.
pub const CUBE_FILE_EXTENSION: &str = "cubes";

/// A single cube at one refinement level.
///
/// Corners are implied by `lower` and the edge length `2^level`; scalar ids
/// are indexed by corner with bit 0 = x, bit 1 = y, bit 2 = z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    /// Minimum corner in world units.
    pub lower: Vec3f,
    /// Refinement level.
    pub level: i32,
    /// One scalar id per corner.
    pub scalar_ids: [i32; CORNER_COUNT],
}

impl Cube {
    /// Scalar ids used by every generated fixture.
    pub const UNIT_SCALARS: [i32; CORNER_COUNT] = [1; CORNER_COUNT];

    /// Creates a cube with [`Self::UNIT_SCALARS`].
    #[must_use]
    pub const fn unit(lower: Vec3f, level: i32) -> Self {
        Self {
            lower,
            level,
            scalar_ids: Self::UNIT_SCALARS,
        }
    }
}

/// Returns the file name for one level of a recipe, `<tag>_<level>.cubes`.
#[must_use]
pub fn level_file_name(tag: &str, level: i32) -> String {
    format!("{tag}_{level}.{CUBE_FILE_EXTENSION}")
}

/// Appends one cube record to `writer`.
pub fn encode_cube(cube: &Cube, writer: &mut ByteWriter) {
    writer.write_f32(cube.lower.x);
    writer.write_f32(cube.lower.y);
    writer.write_f32(cube.lower.z);
    writer.write_i32(cube.level);
    writer.write_i32_slice(&cube.scalar_ids);
}

/// Encodes cubes back to back, in slice order.
#[must_use]
pub fn encode_cubes(cubes: &[Cube]) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(cubes.len() * CUBE_RECORD_SIZE);
    for cube in cubes {
        encode_cube(cube, &mut writer);
    }
    writer.finish()
}

/// Decodes a complete cube file.
///
/// A trailing partial record is reported as [`DecodeError::Truncated`].
pub fn decode_cubes(bytes: &[u8], limits: &Limits) -> RecordResult<Vec<Cube>> {
    let count = bytes.len() / CUBE_RECORD_SIZE;
    if count > limits.max_records {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::RecordCount,
            limit: limits.max_records,
            actual: count,
        });
    }

    let mut reader = ByteReader::new(bytes);
    let mut cubes = Vec::with_capacity(count);
    while !reader.is_empty() {
        let offset = reader.position();
        let cube = decode_cube(&mut reader).ok_or(DecodeError::Truncated {
            offset,
            needed: CUBE_RECORD_SIZE,
            available: bytes.len() - offset,
        })?;
        cubes.push(cube);
    }
    Ok(cubes)
}

fn decode_cube(reader: &mut ByteReader<'_>) -> Option<Cube> {
    if reader.remaining() < CUBE_RECORD_SIZE {
        return None;
    }
    let lower = Vec3f::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let level = reader.read_i32()?;
    let mut scalar_ids = [0i32; CORNER_COUNT];
    for slot in &mut scalar_ids {
        *slot = reader.read_i32()?;
    }
    Some(Cube {
        lower,
        level,
        scalar_ids,
    })
}
