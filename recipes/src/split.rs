//! Recursive octant splitting from macrocell-sized roots.

use record::{Cube, Vec3f};
use tracing::info;

use crate::config::GenConfig;
use crate::error::{RecipeError, RecipeResult};
use crate::grid::{cell_count, cells, check_extent, corner, cube_width};
use crate::sink::LevelSink;

/// File tag of split levels.
pub const SPLIT_TAG: &str = "denseSplittedLevel";

/// Child offsets, in units of the child width, in the order children are written.
///
/// This is not a Gray code; level files depend on the exact sequence.
pub const OCTANT_ORDER: [[i32; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [1, 1, 1],
    [1, 0, 1],
    [0, 0, 1],
    [0, 1, 1],
    [0, 1, 0],
];

/// One cube as large as a macrocell per entry of the config's world size,
/// at `i << level` on each axis.
pub fn macrocell_roots(config: &GenConfig, level: i32) -> RecipeResult<Vec<Cube>> {
    let width = cube_width(level)?;
    let world_size = check_extent(config.world_size)?;

    let mut cubes = Vec::with_capacity(cell_count(config, world_size)?);
    for index in cells(world_size) {
        cubes.push(Cube::unit(corner(index, width, level)?, level));
    }
    Ok(cubes)
}

/// Splits every parent at `level` into its 8 children at `level - 1`.
pub fn split_level(parents: &[Cube], level: i32) -> RecipeResult<Vec<Cube>> {
    if level <= 0 {
        return Err(RecipeError::AlreadyFinest);
    }
    let child_level = level - 1;
    let child_width = cube_width(child_level)? as f32;

    let mut children = Vec::with_capacity(parents.len() * OCTANT_ORDER.len());
    for parent in parents {
        for [dx, dy, dz] in OCTANT_ORDER {
            let offset = Vec3f::new(
                dx as f32 * child_width,
                dy as f32 * child_width,
                dz as f32 * child_width,
            );
            let lower = Vec3f::new(
                parent.lower.x + offset.x,
                parent.lower.y + offset.y,
                parent.lower.z + offset.z,
            );
            children.push(Cube::unit(lower, child_level));
        }
    }
    Ok(children)
}

/// Writes the roots at `level`, then each split level down to 0.
///
/// Returns the number of level files written.
pub fn write_split_set(
    config: &GenConfig,
    sink: &mut impl LevelSink,
    level: i32,
) -> RecipeResult<usize> {
    let mut cubes = macrocell_roots(config, level)?;
    let limit = config.max_cubes_per_level;
    let finest = 8usize
        .checked_pow(level as u32)
        .and_then(|factor| cubes.len().checked_mul(factor));
    if finest.map_or(true, |count| count > limit) {
        return Err(RecipeError::TooManyCubes {
            requested: finest,
            limit,
        });
    }

    sink.write_level(SPLIT_TAG, level, &cubes)?;
    info!("{} cubes generated for lvl {level}", cubes.len());
    let mut files = 1;

    for current in (1..=level).rev() {
        cubes = split_level(&cubes, current)?;
        sink.write_level(SPLIT_TAG, current - 1, &cubes)?;
        info!("{} cubes generated for lvl {}", cubes.len(), current - 1);
        files += 1;
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn children_follow_octant_order() {
        let parent = Cube::unit(Vec3f::new(8.0, 16.0, 0.0), 2);
        let children = split_level(&[parent], 2).unwrap();
        let lowers: Vec<_> = children.iter().map(|c| c.lower).collect();
        assert_eq!(
            lowers,
            vec![
                Vec3f::new(8.0, 16.0, 0.0),
                Vec3f::new(10.0, 16.0, 0.0),
                Vec3f::new(10.0, 18.0, 0.0),
                Vec3f::new(10.0, 18.0, 2.0),
                Vec3f::new(10.0, 16.0, 2.0),
                Vec3f::new(8.0, 16.0, 2.0),
                Vec3f::new(8.0, 18.0, 2.0),
                Vec3f::new(8.0, 18.0, 0.0),
            ]
        );
        assert!(children.iter().all(|c| c.level == 1));
    }

    #[test]
    fn octant_order_covers_each_octant_once() {
        let mut seen: Vec<_> = OCTANT_ORDER.iter().map(|[x, y, z]| x | (y << 1) | (z << 2)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn level_zero_cannot_split() {
        let parent = Cube::unit(Vec3f::default(), 0);
        assert!(matches!(
            split_level(&[parent], 0),
            Err(RecipeError::AlreadyFinest)
        ));
    }

    #[test]
    fn split_set_writes_every_level() {
        let mut sink = MemorySink::new();
        let files = write_split_set(&GenConfig::for_testing(), &mut sink, 2).unwrap();
        assert_eq!(files, 3);

        let names: Vec<_> = sink.levels.iter().map(|l| l.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "denseSplittedLevel_2.cubes",
                "denseSplittedLevel_1.cubes",
                "denseSplittedLevel_0.cubes",
            ]
        );
        let counts: Vec<_> = sink.levels.iter().map(|l| l.cubes.len()).collect();
        assert_eq!(counts, vec![1, 8, 64]);
    }

    #[test]
    fn split_set_at_level_zero_writes_roots_only() {
        let mut sink = MemorySink::new();
        assert_eq!(write_split_set(&GenConfig::default(), &mut sink, 0).unwrap(), 1);
        assert_eq!(sink.levels[0].cubes, vec![Cube::unit(Vec3f::default(), 0)]);
    }

    #[test]
    fn split_set_checks_finest_level_size_up_front() {
        let config = GenConfig {
            max_cubes_per_level: 63,
            ..GenConfig::default()
        };
        let mut sink = MemorySink::new();
        assert!(matches!(
            write_split_set(&config, &mut sink, 2),
            Err(RecipeError::TooManyCubes { requested: Some(64), limit: 63 })
        ));
        assert!(sink.levels.is_empty());
    }
}
