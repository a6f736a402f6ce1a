//! Nested shells zooming into one corner.

use record::{Cube, Vec3f};
use tracing::info;

use crate::error::RecipeResult;
use crate::grid::cube_width;
use crate::sink::LevelSink;

/// File tag of deep levels.
pub const DEEP_TAG: &str = "deepLevelSet";

/// Offsets of the 7 shell cubes around the base, in units of the cube width.
///
/// The eighth octant, `(1, 1, 1)`, is left open and becomes the next base.
pub const SHELL_ORDER: [[i32; 3]; 7] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 1, 1],
    [0, 0, 1],
    [1, 0, 1],
];

/// The 7 shell cubes of one level and the base of the next, finer level.
pub fn deep_shell(base: Vec3f, level: i32) -> RecipeResult<(Vec<Cube>, Vec3f)> {
    let width = cube_width(level)? as f32;
    let at = |[dx, dy, dz]: [i32; 3]| {
        Vec3f::new(
            base.x + dx as f32 * width,
            base.y + dy as f32 * width,
            base.z + dz as f32 * width,
        )
    };
    let cubes = SHELL_ORDER
        .iter()
        .map(|&offset| Cube::unit(at(offset), level))
        .collect();
    Ok((cubes, at([1, 1, 1])))
}

/// Writes one shell per level from `max_level` down to 0, each nested in the
/// open octant of the previous one.
///
/// Returns the number of level files written.
pub fn write_deep_set(
    sink: &mut impl LevelSink,
    max_level: i32,
    base: Vec3f,
) -> RecipeResult<usize> {
    cube_width(max_level)?;
    let mut base = base;
    let mut files = 0;
    for level in (0..=max_level).rev() {
        let (cubes, next_base) = deep_shell(base, level)?;
        sink.write_level(DEEP_TAG, level, &cubes)?;
        info!("{} cubes generated for deeplvl {level}", cubes.len());
        base = next_base;
        files += 1;
    }
    Ok(files)
}
