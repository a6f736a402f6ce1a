//! Morton (Z-order) keys for integer lower corners.

use record::Vec3i;

/// Morton key type.
pub type MortonKey = u64;

/// Bits of each coordinate that take part in the key.
pub const AXIS_BITS: u32 = 22;

const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;

/// Spreads the low 22 bits of `n` so that bit `i` lands on bit `3 * i`.
const fn spread_bits(n: u64) -> u64 {
    let mut n = n & AXIS_MASK;
    n = (n ^ (n << 32)) & 0xFFFF_0000_0000_FFFF;
    n = (n ^ (n << 16)) & 0x00FF_0000_FF00_00FF;
    n = (n ^ (n << 8)) & 0xF00F_00F0_0F00_F00F;
    n = (n ^ (n << 4)) & 0x30C3_0C30_C30C_30C3;
    n = (n ^ (n << 2)) & 0x9249_2492_4924_9249;
    n
}

/// Interleaves three coordinates into one key: x in bit 0 of each triplet,
/// y in bit 1, z in bit 2.
///
/// Bit 21 of y and z would land past bit 63 and is shifted out, so only x
/// contributes all 22 bits.
#[must_use]
pub const fn morton_encode(x: u64, y: u64, z: u64) -> MortonKey {
    spread_bits(x) | (spread_bits(y) << 1) | (spread_bits(z) << 2)
}

/// Morton key of an integer corner.
///
/// Negative coordinates are taken as their two's-complement bit pattern
/// before masking.
#[must_use]
pub const fn morton_key(lower: Vec3i) -> MortonKey {
    morton_encode(
        lower.x as u32 as u64,
        lower.y as u32 as u64,
        lower.z as u32 as u64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn interleave_bitwise(x: u64, y: u64, z: u64) -> u64 {
        let mut key = 0u64;
        for bit in 0..u64::from(AXIS_BITS) {
            for (axis, value) in [x, y, z].into_iter().enumerate() {
                let target = 3 * bit + axis as u64;
                if target < 64 {
                    key |= ((value >> bit) & 1) << target;
                }
            }
        }
        key
    }

    #[test]
    fn unit_axes() {
        assert_eq!(morton_encode(1, 0, 0), 0b001);
        assert_eq!(morton_encode(0, 1, 0), 0b010);
        assert_eq!(morton_encode(0, 0, 1), 0b100);
        assert_eq!(morton_encode(2, 0, 0), 0b001_000);
        assert_eq!(morton_encode(3, 3, 3), 0b111_111);
    }

    #[test]
    fn corners_follow_z_order() {
        let corners = [
            (0, 0, 0),
            (1, 0, 0),
            (0, 1, 0),
            (1, 1, 0),
            (0, 0, 1),
            (1, 0, 1),
            (0, 1, 1),
            (1, 1, 1),
        ];
        let keys: Vec<_> = corners
            .iter()
            .map(|&(x, y, z)| morton_key(Vec3i::new(x, y, z)))
            .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(keys, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn only_low_22_bits_count() {
        assert_eq!(morton_encode(1 << 22, 0, 0), 0);
        assert_eq!(morton_encode(AXIS_MASK, 0, 0), 0x9249_2492_4924_9249);
        // bit 21 of z lands on bit 65
        assert_eq!(morton_encode(0, 0, 1 << 21), 0);
    }

    #[test]
    fn negative_coordinates_use_twos_complement() {
        let key = morton_key(Vec3i::new(-1, 0, 0));
        assert_eq!(key, morton_encode(AXIS_MASK, 0, 0));
    }

    #[test]
    fn octree_children_sort_after_parent_block() {
        // Every key inside the 4-wide block at the origin precedes the next block.
        let inside = morton_key(Vec3i::new(3, 3, 3));
        let next_block = morton_key(Vec3i::new(4, 0, 0));
        assert!(inside < next_block);
    }

    proptest! {
        #[test]
        fn prop_matches_bitwise_interleave(x in any::<u64>(), y in any::<u64>(), z in any::<u64>()) {
            prop_assert_eq!(morton_encode(x, y, z), interleave_bitwise(x, y, z));
        }

        #[test]
        fn prop_monotone_along_each_axis(
            x in 0u64..(1 << 20),
            y in 0u64..(1 << 20),
            z in 0u64..(1 << 20),
        ) {
            let key = morton_encode(x, y, z);
            prop_assert!(key < morton_encode(x + 1, y, z));
            prop_assert!(key < morton_encode(x, y + 1, z));
            prop_assert!(key < morton_encode(x, y, z + 1));
        }
    }
}
