//! Error types for fixture generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use record::Vec3i;

/// Result type for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Errors that can occur while generating or writing a level.
#[derive(Debug)]
pub enum RecipeError {
    /// Level outside `0..=max`.
    InvalidLevel { level: i32, max: i32 },

    /// A world size or cube extent with a non-positive axis.
    InvalidExtent { extent: Vec3i },

    /// Macrocell width must be positive.
    InvalidMacrocellWidth { width: i32 },

    /// A level would hold more cubes than allowed (`None` when the count overflows).
    TooManyCubes { requested: Option<usize>, limit: usize },

    /// A cube coordinate does not fit the integer grid.
    CoordinateOverflow { level: i32 },

    /// Level 0 cubes cannot be split further.
    AlreadyFinest,

    /// Writing a level file failed.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { level, max } => {
                write!(f, "invalid level {level}, expected 0..={max}")
            }
            Self::InvalidExtent { extent } => {
                write!(f, "invalid extent {extent}, every axis must be positive")
            }
            Self::InvalidMacrocellWidth { width } => {
                write!(f, "invalid macrocell width {width}")
            }
            Self::TooManyCubes {
                requested: Some(requested),
                limit,
            } => {
                write!(f, "level would hold {requested} cubes, limit is {limit}")
            }
            Self::TooManyCubes {
                requested: None,
                limit,
            } => {
                write!(f, "level cube count overflows, limit is {limit}")
            }
            Self::CoordinateOverflow { level } => {
                write!(f, "cube coordinates overflow at level {level}")
            }
            Self::AlreadyFinest => write!(f, "it's already the smallest level"),
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
