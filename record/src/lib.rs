//! Cube and brick record layouts for cubefix fixture files.
//!
//! Fixture files carry no header: a cube file is a run of fixed 48-byte
//! records, and a brick file is a run of records whose scalar array length is
//! derived from the extent stored in each record. All values are 32-bit
//! little-endian.
//!
//! # Design Principles
//!
//! - **Explicit layout** - Fields are written one by one through a byte cursor,
//!   never by reinterpreting struct memory.
//! - **Bounded decoding** - Derived lengths are checked against [`Limits`]
//!   before allocating.
//! - **No domain knowledge** - Scalar ids are opaque integers.
//!
//! # Example
//!
//! ```
//! use record::{decode_cubes, encode_cubes, Cube, Limits, Vec3f};
//!
//! let cubes = vec![Cube::unit(Vec3f::new(8.0, 0.0, 0.0), 0)];
//! let bytes = encode_cubes(&cubes);
//! assert_eq!(bytes.len(), record::CUBE_RECORD_SIZE);
//!
//! let decoded = decode_cubes(&bytes, &Limits::default()).unwrap();
//! assert_eq!(decoded, cubes);
//! ```

mod brick;
mod cube;
mod error;
mod limits;
mod reader;
mod vec3;
mod writer;

pub use brick::{
    decode_bricks, encode_brick, encode_bricks, scalar_count, Brick, DecodedBricks, TailPolicy,
    BRICK_HEADER_SIZE,
};
pub use cube::{
    decode_cubes, encode_cube, encode_cubes, level_file_name, Cube, CORNER_COUNT,
    CUBE_FILE_EXTENSION, CUBE_RECORD_SIZE,
};
pub use error::{ConvertError, DecodeError, EncodeError, LimitKind, RecordResult};
pub use limits::Limits;
pub use reader::ByteReader;
pub use vec3::{Vec3, Vec3f, Vec3i};
pub use writer::ByteWriter;
