//! Error types for record encoding and decoding.

use std::fmt;

use crate::vec3::{Vec3f, Vec3i};

/// Result type for record decoding.
pub type RecordResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The stream ended inside a record.
    Truncated {
        /// Byte offset where the partial record starts.
        offset: usize,
        /// Bytes the record needs from `offset`.
        needed: usize,
        /// Bytes left in the stream from `offset`.
        available: usize,
    },

    /// A brick declared a negative extent on some axis.
    InvalidExtent { offset: usize, num_cubes: Vec3i },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    RecordCount,
    ScalarsPerBrick,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A brick's scalar array does not match the count its extent implies.
    ScalarCountMismatch { expected: usize, actual: usize },

    /// A brick's extent is negative or its vertex count overflows.
    InvalidExtent { num_cubes: Vec3i },
}

/// Errors that can occur when widening a cube into a brick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// The cube's corner is not an integer point representable as `i32`.
    NonIntegralLower { lower: Vec3f },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "truncated record at byte {offset}: need {needed} bytes, have {available}"
                )
            }
            Self::InvalidExtent { offset, num_cubes } => {
                write!(f, "invalid brick extent {num_cubes} at byte {offset}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RecordCount => "record count",
            Self::ScalarsPerBrick => "scalars per brick",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScalarCountMismatch { expected, actual } => {
                write!(
                    f,
                    "scalar count mismatch: extent needs {expected}, have {actual}"
                )
            }
            Self::InvalidExtent { num_cubes } => {
                write!(f, "invalid brick extent {num_cubes}")
            }
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegralLower { lower } => {
                write!(f, "cube lower {lower} is not an integer point")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}

impl std::error::Error for ConvertError {}
