//! One cube per macrocell.

use record::{Cube, Vec3i};
use tracing::info;

use crate::config::GenConfig;
use crate::error::RecipeResult;
use crate::grid::{cell_count, cells, check_extent, corner, cube_width, macrocell_width};
use crate::sink::LevelSink;

/// File tag of scarce levels.
pub const SCARCE_TAG: &str = "scarceLevel";

/// One cube per macrocell of `world_size`, z fastest.
///
/// Cube `(i, j, k)` sits at `(macrocell_width * i) << level` on each axis.
pub fn scarce_level(config: &GenConfig, level: i32, world_size: Vec3i) -> RecipeResult<Vec<Cube>> {
    let width = cube_width(level)?;
    let world_size = check_extent(world_size)?;
    let spacing = i64::from(macrocell_width(config)?) * width;

    let mut cubes = Vec::with_capacity(cell_count(config, world_size)?);
    for index in cells(world_size) {
        cubes.push(Cube::unit(corner(index, spacing, level)?, level));
    }
    Ok(cubes)
}

/// Generates a scarce level and hands it to `sink`.
pub fn write_scarce_level(
    config: &GenConfig,
    sink: &mut impl LevelSink,
    level: i32,
    world_size: Vec3i,
) -> RecipeResult<usize> {
    let cubes = scarce_level(config, level, world_size)?;
    sink.write_level(SCARCE_TAG, level, &cubes)?;
    info!("{} cubes generated for scarce lvl {level}", cubes.len());
    Ok(cubes.len())
}
