use std::fs;
use std::path::PathBuf;

use canon::{compare_unordered, Verdict};
use proptest::prelude::*;
use recipes::{
    dense_level, split_level, FileSink, GenConfig, MemorySink, Recipe, OCTANT_ORDER,
};
use record::{decode_cubes, Brick, Cube, Limits, Vec3f, Vec3i};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "cubefix-recipes-{name}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn to_bricks(cubes: Vec<Cube>) -> Vec<Brick> {
    cubes
        .into_iter()
        .map(|cube| Brick::try_from(cube).unwrap())
        .collect()
}

#[test]
#[tracing_test::traced_test]
fn scarce_level_file_contents() {
    let dir = temp_dir("scarce");
    let mut sink = FileSink::new(&dir);
    let recipe = Recipe::Scarce {
        level: 0,
        world_size: Vec3i::new(2, 1, 1),
    };
    recipe.run(&GenConfig::default(), &mut sink).unwrap();

    let bytes = fs::read(dir.join("scarceLevel_0.cubes")).unwrap();
    let cubes = decode_cubes(&bytes, &Limits::default()).unwrap();
    assert_eq!(
        cubes,
        vec![
            Cube::unit(Vec3f::new(0.0, 0.0, 0.0), 0),
            Cube::unit(Vec3f::new(8.0, 0.0, 0.0), 0),
        ]
    );
    assert!(logs_contain("done writing level"));
    assert!(logs_contain("2 cubes generated for scarce lvl 0"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn shuffled_dense_level_matches_plain_after_canonical_sort() {
    let config = GenConfig {
        macrocell_width: 4,
        ..GenConfig::for_testing()
    };
    let world = Vec3i::new(2, 1, 1);
    let plain = dense_level(&config, 1, world).unwrap();
    let shuffled = dense_level(&config.clone().with_shuffle(true), 1, world).unwrap();
    assert_ne!(plain, shuffled);

    let verdict = compare_unordered(to_bricks(plain), to_bricks(shuffled));
    assert_eq!(verdict, Verdict::Match { records: 128 });
}

#[test]
fn split_levels_tile_the_root() {
    let mut sink = MemorySink::new();
    Recipe::Split { level: 3 }
        .run(&GenConfig::for_testing(), &mut sink)
        .unwrap();

    // Every level covers the same 8^3 volume with non-overlapping cubes.
    for written in &sink.levels {
        let width = (1 << written.level) as f32;
        let volume: f32 = written.cubes.iter().map(|_| width * width * width).sum();
        assert_eq!(volume, 512.0, "{}", written.file_name);

        let mut lowers: Vec<_> = written
            .cubes
            .iter()
            .map(|c| c.lower.to_array().map(|v| v as i32))
            .collect();
        lowers.sort_unstable();
        lowers.dedup();
        assert_eq!(lowers.len(), written.cubes.len());
    }
}

#[test]
fn file_sink_propagates_write_failure() {
    let dir = temp_dir("readonly").join("missing");
    let mut sink = FileSink::new(&dir);
    let err = Recipe::Deep { level: 0 }
        .run(&GenConfig::default(), &mut sink)
        .unwrap_err();
    assert!(err.to_string().contains("deepLevelSet_0.cubes"));
}

proptest! {
    #[test]
    fn prop_octant_split_exact(
        x in -1000i32..1000,
        y in -1000i32..1000,
        z in -1000i32..1000,
        level in 1i32..12,
    ) {
        let parent = Cube::unit(Vec3f::new(x as f32, y as f32, z as f32), level);
        let children = split_level(&[parent], level).unwrap();
        prop_assert_eq!(children.len(), 8);

        let half = (1 << (level - 1)) as f32;
        for (child, [dx, dy, dz]) in children.iter().zip(OCTANT_ORDER) {
            prop_assert_eq!(child.level, level - 1);
            prop_assert_eq!(
                child.lower,
                Vec3f::new(
                    parent.lower.x + dx as f32 * half,
                    parent.lower.y + dy as f32 * half,
                    parent.lower.z + dz as f32 * half,
                )
            );
        }
    }
}
