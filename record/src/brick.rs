//! Variable-size brick records read by the comparator.

use crate::cube::Cube;
use crate::error::{ConvertError, DecodeError, EncodeError, LimitKind, RecordResult};
use crate::limits::Limits;
use crate::reader::ByteReader;
use crate::vec3::Vec3i;
use crate::writer::ByteWriter;

/// Encoded size of the fixed part of a brick record (lower, level, extent).
pub const BRICK_HEADER_SIZE: usize = 7 * 4;

/// A block of `num_cubes` cubes sharing one vertex grid of scalar ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brick {
    /// Minimum corner.
    pub lower: Vec3i,
    /// Refinement level.
    pub level: i32,
    /// Extent in cubes along each axis.
    pub num_cubes: Vec3i,
    /// One scalar id per grid vertex, `(nx+1)*(ny+1)*(nz+1)` entries.
    pub scalar_ids: Vec<i32>,
}

impl Brick {
    /// Number of scalar ids implied by the brick's extent.
    #[must_use]
    pub fn expected_scalar_count(&self) -> Option<usize> {
        scalar_count(self.num_cubes)
    }
}

/// Number of grid vertices spanned by an extent of `num_cubes` cubes.
///
/// Returns `None` for a negative axis or when the count overflows.
#[must_use]
pub fn scalar_count(num_cubes: Vec3i) -> Option<usize> {
    if num_cubes.x < 0 || num_cubes.y < 0 || num_cubes.z < 0 {
        return None;
    }
    num_cubes
        .map(|n| n.checked_add(1).and_then(|v| usize::try_from(v).ok()))
        .to_array()
        .into_iter()
        .try_fold(1usize, |acc, axis| acc.checked_mul(axis?))
}

impl TryFrom<Cube> for Brick {
    type Error = ConvertError;

    /// Widens a cube into a one-cube brick.
    fn try_from(cube: Cube) -> Result<Self, Self::Error> {
        let to_int = |value: f32| {
            let in_range = value.fract() == 0.0
                && value >= i32::MIN as f32
                && value < i32::MAX as f32;
            in_range.then_some(value as i32)
        };
        let lower = match (to_int(cube.lower.x), to_int(cube.lower.y), to_int(cube.lower.z)) {
            (Some(x), Some(y), Some(z)) => Vec3i::new(x, y, z),
            _ => return Err(ConvertError::NonIntegralLower { lower: cube.lower }),
        };
        Ok(Self {
            lower,
            level: cube.level,
            num_cubes: Vec3i::splat(1),
            scalar_ids: cube.scalar_ids.to_vec(),
        })
    }
}

/// How a decoder treats a record cut short by the end of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// A partial record is a [`DecodeError::Truncated`].
    #[default]
    Strict,
    /// A partial record ends the stream and its bytes are discarded.
    Lenient,
}

/// Bricks decoded from a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedBricks {
    /// Records in stream order.
    pub bricks: Vec<Brick>,
    /// Bytes of a partial final record dropped under [`TailPolicy::Lenient`].
    pub discarded_bytes: usize,
}

/// Appends one brick record to `writer`.
pub fn encode_brick(brick: &Brick, writer: &mut ByteWriter) -> Result<(), EncodeError> {
    let expected = brick
        .expected_scalar_count()
        .ok_or(EncodeError::InvalidExtent {
            num_cubes: brick.num_cubes,
        })?;
    if expected != brick.scalar_ids.len() {
        return Err(EncodeError::ScalarCountMismatch {
            expected,
            actual: brick.scalar_ids.len(),
        });
    }

    for value in brick.lower.to_array() {
        writer.write_i32(value);
    }
    writer.write_i32(brick.level);
    for value in brick.num_cubes.to_array() {
        writer.write_i32(value);
    }
    writer.write_i32_slice(&brick.scalar_ids);
    Ok(())
}

/// Encodes bricks back to back, in slice order.
pub fn encode_bricks(bricks: &[Brick]) -> Result<Vec<u8>, EncodeError> {
    let mut writer = ByteWriter::new();
    for brick in bricks {
        encode_brick(brick, &mut writer)?;
    }
    Ok(writer.finish())
}

/// Decodes a brick stream until the end of `bytes`.
///
/// The scalar array length is derived from each record's extent. A clean end
/// of input between records ends the stream; a record cut short is handled
/// according to `policy`.
pub fn decode_bricks(
    bytes: &[u8],
    limits: &Limits,
    policy: TailPolicy,
) -> RecordResult<DecodedBricks> {
    let mut reader = ByteReader::new(bytes);
    let mut bricks = Vec::new();

    while !reader.is_empty() {
        let offset = reader.position();
        match decode_brick(&mut reader, offset, limits) {
            Ok(brick) => {
                if bricks.len() == limits.max_records {
                    return Err(DecodeError::LimitsExceeded {
                        kind: LimitKind::RecordCount,
                        limit: limits.max_records,
                        actual: bricks.len() + 1,
                    });
                }
                bricks.push(brick);
            }
            Err(DecodeError::Truncated { .. }) if policy == TailPolicy::Lenient => {
                return Ok(DecodedBricks {
                    bricks,
                    discarded_bytes: bytes.len() - offset,
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(DecodedBricks {
        bricks,
        discarded_bytes: 0,
    })
}

fn decode_brick(reader: &mut ByteReader<'_>, offset: usize, limits: &Limits) -> RecordResult<Brick> {
    let available = reader.remaining();
    let truncated = |needed| DecodeError::Truncated {
        offset,
        needed,
        available,
    };
    if available < BRICK_HEADER_SIZE {
        return Err(truncated(BRICK_HEADER_SIZE));
    }

    let mut header = [0i32; 7];
    for slot in &mut header {
        *slot = reader.read_i32().ok_or_else(|| truncated(BRICK_HEADER_SIZE))?;
    }
    let lower = Vec3i::new(header[0], header[1], header[2]);
    let level = header[3];
    let num_cubes = Vec3i::new(header[4], header[5], header[6]);

    let count = scalar_count(num_cubes).ok_or(DecodeError::InvalidExtent { offset, num_cubes })?;
    if count > limits.max_scalars_per_brick {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::ScalarsPerBrick,
            limit: limits.max_scalars_per_brick,
            actual: count,
        });
    }
    let scalar_ids = reader
        .read_i32_vec(count)
        .ok_or_else(|| {
            truncated(
                count
                    .checked_mul(4)
                    .and_then(|bytes| bytes.checked_add(BRICK_HEADER_SIZE))
                    .unwrap_or(usize::MAX),
            )
        })?;

    Ok(Brick {
        lower,
        level,
        num_cubes,
        scalar_ids,
    })
}
