//! Generation recipes for synthetic cube level fixtures.
//!
//! Each recipe enumerates cubes over a 3D index space and hands every
//! finished level to a [`LevelSink`], which by default writes one
//! `<tag>_<level>.cubes` file per level.
//!
//! # Recipes
//!
//! - **Scarce** - one cube per macrocell.
//! - **Dense** - every cell of a macrocell grid, optionally shuffled.
//! - **Split** - macrocell-sized roots split into octants down to level 0.
//! - **Deep** - 7-cube shells nested into one corner, level by level.
//! - **Dense preset** - 20 adjoining basis-tiled dense levels.
//!
//! # Design Principles
//!
//! - **Explicit configuration** - Parameters travel in [`GenConfig`]; there is
//!   no process-wide state.
//! - **Pure generation** - Recipes build a `Vec<Cube>` and only then call the sink.
//! - **Checked arithmetic** - Levels, extents and coordinates are validated
//!   instead of overflowing.

mod config;
mod deep;
mod dense;
mod error;
mod grid;
mod recipe;
mod scarce;
mod sink;
mod split;

pub use config::{GenConfig, DEFAULT_MACROCELL_WIDTH, MAX_LEVEL};
pub use deep::{deep_shell, write_deep_set, DEEP_TAG, SHELL_ORDER};
pub use dense::{
    dense_level, dense_preset, dense_preset_with, dense_tag, tiled_level, write_dense_level,
    write_tiled_level, DENSE_TAG, PRESET_LEVELS, PRESET_MACROCELLS,
};
pub use error::{RecipeError, RecipeResult};
pub use recipe::Recipe;
pub use scarce::{scarce_level, write_scarce_level, SCARCE_TAG};
pub use sink::{EchoSink, FileSink, LevelSink, MemorySink, WrittenLevel};
pub use split::{macrocell_roots, split_level, write_split_set, OCTANT_ORDER, SPLIT_TAG};
