//! One typed variant per recipe, decoupled from how parameters are acquired.

use record::{Vec3f, Vec3i};

use crate::config::GenConfig;
use crate::deep::write_deep_set;
use crate::dense::{dense_preset, write_dense_level};
use crate::error::RecipeResult;
use crate::scarce::write_scarce_level;
use crate::sink::LevelSink;
use crate::split::write_split_set;

/// A fully parameterized generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// One cube per macrocell at one level.
    Scarce { level: i32, world_size: Vec3i },
    /// Macrocell roots at `level`, split down to level 0.
    Split { level: i32 },
    /// Nested corner shells from `level` down to 0.
    Deep { level: i32 },
    /// Every cell of a macrocell grid at one level.
    Dense { level: i32, world_size: Vec3i },
    /// 20 adjoining dense levels.
    DensePreset,
}

impl Recipe {
    /// Runs the recipe, handing every level to `sink`.
    ///
    /// Returns the number of level files written.
    pub fn run(&self, config: &GenConfig, sink: &mut impl LevelSink) -> RecipeResult<usize> {
        match *self {
            Self::Scarce { level, world_size } => {
                write_scarce_level(config, sink, level, world_size).map(|_| 1)
            }
            Self::Split { level } => write_split_set(config, sink, level),
            Self::Deep { level } => write_deep_set(sink, level, Vec3f::default()),
            Self::Dense { level, world_size } => {
                write_dense_level(config, sink, level, world_size).map(|_| 1)
            }
            Self::DensePreset => dense_preset(config, sink),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scarce { .. } => "scarce",
            Self::Split { .. } => "split",
            Self::Deep { .. } => "deep",
            Self::Dense { .. } => "dense",
            Self::DensePreset => "dense-preset",
        }
    }
}
