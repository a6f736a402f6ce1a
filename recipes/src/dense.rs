//! Fully populated levels: per-macrocell grids and basis-tiled presets.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use record::{Cube, Vec3f, Vec3i};
use tracing::{debug, info};

use crate::config::GenConfig;
use crate::error::{RecipeError, RecipeResult};
use crate::grid::{
    cell_count, cells, check_extent, corner, coordinate, cube_width, macrocell_width, scale_extent,
};
use crate::sink::LevelSink;

/// File tag of basis-tiled levels; per-macrocell levels append the world width.
pub const DENSE_TAG: &str = "denseLevel";

/// Levels written by the dense preset.
pub const PRESET_LEVELS: i32 = 20;

/// Macrocells per axis of every dense preset level.
pub const PRESET_MACROCELLS: i32 = 35;

/// File tag of a per-macrocell dense level, `denseLevel<world_size.x>`.
#[must_use]
pub fn dense_tag(world_size: Vec3i) -> String {
    format!("{DENSE_TAG}{}", world_size.x)
}

/// Every cell of a `world_size * macrocell_width` grid at `level`, z fastest.
///
/// Cells are one cube width apart. With `config.shuffle` the output order is
/// permuted uniformly; the set of cubes is unchanged.
pub fn dense_level(config: &GenConfig, level: i32, world_size: Vec3i) -> RecipeResult<Vec<Cube>> {
    let width = cube_width(level)?;
    let dims = scale_extent(check_extent(world_size)?, macrocell_width(config)?)?;

    let mut cubes = Vec::with_capacity(cell_count(config, dims)?);
    for index in cells(dims) {
        cubes.push(Cube::unit(corner(index, width, level)?, level));
    }

    if config.shuffle {
        shuffle_cubes(&mut cubes, config.seed);
        debug!(level, "shuffled cubes");
    }
    Ok(cubes)
}

/// Generates a dense level and hands it to `sink`.
pub fn write_dense_level(
    config: &GenConfig,
    sink: &mut impl LevelSink,
    level: i32,
    world_size: Vec3i,
) -> RecipeResult<usize> {
    let cubes = dense_level(config, level, world_size)?;
    info!("{} cubes generated for dense lvl {level}", cubes.len());
    sink.write_level(&dense_tag(world_size), level, &cubes)?;
    Ok(cubes.len())
}

/// `num_cubes` cubes per axis at `level`, offset by `basis`, z fastest.
pub fn tiled_level(
    config: &GenConfig,
    num_cubes: Vec3i,
    level: i32,
    basis: Vec3f,
) -> RecipeResult<Vec<Cube>> {
    let width = cube_width(level)?;
    let num_cubes = check_extent(num_cubes)?;

    let mut cubes = Vec::with_capacity(cell_count(config, num_cubes)?);
    for [i, j, k] in cells(num_cubes) {
        let lower = Vec3f::new(
            coordinate(i.into(), width, level)? + basis.x,
            coordinate(j.into(), width, level)? + basis.y,
            coordinate(k.into(), width, level)? + basis.z,
        );
        cubes.push(Cube::unit(lower, level));
    }
    Ok(cubes)
}

/// Generates a tiled level, hands it to `sink`, and returns the lower corner
/// of the last cube.
pub fn write_tiled_level(
    config: &GenConfig,
    sink: &mut impl LevelSink,
    num_cubes: Vec3i,
    level: i32,
    basis: Vec3f,
) -> RecipeResult<Vec3f> {
    let cubes = tiled_level(config, num_cubes, level, basis)?;
    let last = cubes.last().map(|cube| cube.lower).ok_or(RecipeError::InvalidExtent {
        extent: num_cubes,
    })?;
    info!(
        "{} cubes generated for denseWithBasis, level={level} basis= {basis}",
        cubes.len()
    );
    sink.write_level(DENSE_TAG, level, &cubes)?;
    Ok(last)
}

/// Writes the 20-level dense preset of `35 * macrocell_width` cubes per axis.
pub fn dense_preset(config: &GenConfig, sink: &mut impl LevelSink) -> RecipeResult<usize> {
    dense_preset_with(config, sink, PRESET_LEVELS, PRESET_MACROCELLS)
}

/// Writes `levels` adjoining dense levels, starting at level 0.
///
/// Each level starts one cube width past the last cube of the previous level
/// on every axis. Returns the number of level files written.
pub fn dense_preset_with(
    config: &GenConfig,
    sink: &mut impl LevelSink,
    levels: i32,
    macrocells: i32,
) -> RecipeResult<usize> {
    let per_axis = scale_extent(Vec3i::splat(macrocells), macrocell_width(config)?)?;
    let mut basis = Vec3f::default();
    let mut files = 0;
    for level in 0..levels {
        let last = write_tiled_level(config, sink, per_axis, level, basis)?;
        let width = cube_width(level)? as f32;
        basis = Vec3f::new(last.x + width, last.y + width, last.z + width);
        files += 1;
    }
    info!("{levels} dense levels generated!");
    Ok(files)
}

fn shuffle_cubes(cubes: &mut [Cube], seed: Option<u64>) {
    match seed {
        Some(seed) => cubes.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => cubes.shuffle(&mut thread_rng()),
    }
}
