//! Configurable limits for bounded decoding.

/// Limits enforced while decoding brick streams.
///
/// Brick scalar arrays have no stored length; their size comes from the
/// extent fields, so a corrupt header could otherwise request an enormous
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of records in one file.
    pub max_records: usize,

    /// Maximum number of scalars in one brick.
    pub max_scalars_per_brick: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // The 20-level preset writes 280^3 cubes per level
            max_records: 64 * 1024 * 1024,

            // A 64^3-cube brick
            max_scalars_per_brick: 65 * 65 * 65,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_records: 1024,
            max_scalars_per_brick: 729,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_records: usize::MAX,
            max_scalars_per_brick: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_fit_preset_levels() {
        let limits = Limits::default();
        assert!(limits.max_records >= 280 * 280 * 280);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();
        assert!(test_limits.max_records < default_limits.max_records);
        assert!(test_limits.max_scalars_per_brick < default_limits.max_scalars_per_brick);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_records, usize::MAX);
        assert_eq!(limits.max_scalars_per_brick, usize::MAX);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_scalars_per_brick, 9 * 9 * 9);
    }
}
