//! Canonical ordering of brick record sets.

use std::cmp::Ordering;

use record::Brick;

use crate::morton::morton_key;

/// Compares two bricks in canonical order.
///
/// The Morton key of `lower` decides first. Keys only see 22 bits per axis,
/// so equal keys fall back to `lower` (z, y, x), then level, extent and
/// scalars, which makes the order total.
pub fn canonical_cmp(a: &Brick, b: &Brick) -> Ordering {
    morton_key(a.lower)
        .cmp(&morton_key(b.lower))
        .then_with(|| {
            (a.lower.z, a.lower.y, a.lower.x).cmp(&(b.lower.z, b.lower.y, b.lower.x))
        })
        .then_with(|| a.level.cmp(&b.level))
        .then_with(|| a.num_cubes.to_array().cmp(&b.num_cubes.to_array()))
        .then_with(|| a.scalar_ids.cmp(&b.scalar_ids))
}

/// Sorts bricks into canonical order in place.
pub fn canonical_sort(bricks: &mut [Brick]) {
    bricks.sort_unstable_by(canonical_cmp);
}

/// Returns `true` if `bricks` is already in canonical order.
pub fn is_canonical(bricks: &[Brick]) -> bool {
    bricks
        .windows(2)
        .all(|pair| canonical_cmp(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::Vec3i;

    fn brick_at(x: i32, y: i32, z: i32) -> Brick {
        Brick {
            lower: Vec3i::new(x, y, z),
            level: 0,
            num_cubes: Vec3i::splat(1),
            scalar_ids: vec![1; 8],
        }
    }

    #[test]
    fn sorts_by_z_order_not_tuple_order() {
        // Tuple order on (x, y, z) would put (0, 2, 0) before (1, 0, 0).
        let mut bricks = vec![brick_at(0, 2, 0), brick_at(1, 0, 0), brick_at(0, 0, 0)];
        canonical_sort(&mut bricks);
        let lowers: Vec<_> = bricks.iter().map(|b| b.lower).collect();
        assert_eq!(
            lowers,
            vec![
                Vec3i::new(0, 0, 0),
                Vec3i::new(1, 0, 0),
                Vec3i::new(0, 2, 0)
            ]
        );
    }

    #[test]
    fn equal_keys_break_ties_on_coordinates() {
        // Both keys reduce to 0: only bit 22 of x differs.
        let far = brick_at(1 << 22, 0, 0);
        let origin = brick_at(0, 0, 0);
        assert_eq!(morton_key(far.lower), morton_key(origin.lower));
        assert_eq!(canonical_cmp(&origin, &far), Ordering::Less);
        assert_eq!(canonical_cmp(&far, &origin), Ordering::Greater);
    }

    #[test]
    fn same_corner_breaks_ties_on_contents() {
        let a = brick_at(0, 0, 0);
        let mut b = brick_at(0, 0, 0);
        b.scalar_ids[7] = 2;
        assert_eq!(canonical_cmp(&a, &b), Ordering::Less);
        assert_eq!(canonical_cmp(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn is_canonical_detects_order() {
        let mut bricks = vec![brick_at(1, 1, 1), brick_at(0, 0, 0)];
        assert!(!is_canonical(&bricks));
        canonical_sort(&mut bricks);
        assert!(is_canonical(&bricks));
        assert!(is_canonical(&[]));
    }
}
