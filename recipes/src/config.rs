//! Generation parameters shared by every recipe.

use record::Vec3i;

/// Highest level a recipe accepts; `1 << MAX_LEVEL` still fits an `i32`.
pub const MAX_LEVEL: i32 = 30;

/// Default macrocell width in cells.
pub const DEFAULT_MACROCELL_WIDTH: i32 = 8;

/// Parameters passed by reference into each recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Width of one macrocell in cells.
    pub macrocell_width: i32,

    /// World size in macrocells, used where a recipe is not given one.
    pub world_size: Vec3i,

    /// Shuffle the output order of dense levels.
    pub shuffle: bool,

    /// Seed for shuffling; `None` draws from the thread RNG.
    pub seed: Option<u64>,

    /// Largest number of cubes a single level may hold.
    pub max_cubes_per_level: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            macrocell_width: DEFAULT_MACROCELL_WIDTH,
            world_size: Vec3i::splat(1),
            shuffle: false,
            seed: None,
            // The 20-level preset needs 280^3 cubes per level
            max_cubes_per_level: 64 * 1024 * 1024,
        }
    }
}

impl GenConfig {
    /// Creates a config suitable for testing: small levels, deterministic shuffling.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            seed: Some(7),
            max_cubes_per_level: 64 * 1024,
            ..Self::default()
        }
    }

    /// Returns a copy with shuffling switched on or off.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixture_conventions() {
        let config = GenConfig::default();
        assert_eq!(config.macrocell_width, 8);
        assert_eq!(config.world_size, Vec3i::new(1, 1, 1));
        assert!(!config.shuffle);
        assert!(config.max_cubes_per_level >= 280 * 280 * 280);
    }

    #[test]
    fn testing_config_is_seeded() {
        let config = GenConfig::for_testing();
        assert_eq!(config.seed, Some(7));
        assert!(config.max_cubes_per_level < GenConfig::default().max_cubes_per_level);
    }

    #[test]
    fn max_level_width_fits_i32() {
        assert!(1i64 << MAX_LEVEL <= i64::from(i32::MAX));
    }
}
