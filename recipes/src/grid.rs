//! Index-space helpers shared by the recipes.

use record::{Vec3f, Vec3i};

use crate::config::{GenConfig, MAX_LEVEL};
use crate::error::{RecipeError, RecipeResult};

/// Checks a level and returns the cube edge length `1 << level`.
pub fn cube_width(level: i32) -> RecipeResult<i64> {
    if !(0..=MAX_LEVEL).contains(&level) {
        return Err(RecipeError::InvalidLevel {
            level,
            max: MAX_LEVEL,
        });
    }
    Ok(1i64 << level)
}

/// Checks that every axis of `extent` is positive.
pub fn check_extent(extent: Vec3i) -> RecipeResult<Vec3i> {
    if extent.x <= 0 || extent.y <= 0 || extent.z <= 0 {
        return Err(RecipeError::InvalidExtent { extent });
    }
    Ok(extent)
}

/// Checks the config's macrocell width.
pub fn macrocell_width(config: &GenConfig) -> RecipeResult<i32> {
    let width = config.macrocell_width;
    if width <= 0 {
        return Err(RecipeError::InvalidMacrocellWidth { width });
    }
    Ok(width)
}

/// Number of cells in `dims`, bounded by the config's per-level limit.
pub fn cell_count(config: &GenConfig, dims: Vec3i) -> RecipeResult<usize> {
    let limit = config.max_cubes_per_level;
    match dims.checked_volume() {
        Some(count) if count <= limit => Ok(count),
        requested => Err(RecipeError::TooManyCubes { requested, limit }),
    }
}

/// Multiplies every axis of `extent` by `factor`.
pub fn scale_extent(extent: Vec3i, factor: i32) -> RecipeResult<Vec3i> {
    let scale = |axis: i32| axis.checked_mul(factor);
    match (scale(extent.x), scale(extent.y), scale(extent.z)) {
        (Some(x), Some(y), Some(z)) => Ok(Vec3i::new(x, y, z)),
        _ => Err(RecipeError::TooManyCubes {
            requested: None,
            limit: usize::MAX,
        }),
    }
}

/// Grid coordinate `index * width` as stored in a cube record.
pub fn coordinate(index: i64, width: i64, level: i32) -> RecipeResult<f32> {
    index
        .checked_mul(width)
        .and_then(|value| i32::try_from(value).ok())
        .map(|value| value as f32)
        .ok_or(RecipeError::CoordinateOverflow { level })
}

/// Scales an index triple by `width` into a cube corner.
pub fn corner(index: [i32; 3], width: i64, level: i32) -> RecipeResult<Vec3f> {
    Ok(Vec3f::new(
        coordinate(index[0].into(), width, level)?,
        coordinate(index[1].into(), width, level)?,
        coordinate(index[2].into(), width, level)?,
    ))
}

/// Row-major cell indices of `dims` with z varying fastest.
pub fn cells(dims: Vec3i) -> impl Iterator<Item = [i32; 3]> {
    (0..dims.x).flat_map(move |i| {
        (0..dims.y).flat_map(move |j| (0..dims.z).map(move |k| [i, j, k]))
    })
}
