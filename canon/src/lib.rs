//! Canonical ordering and structural comparison of brick record sets.
//!
//! Two runs of a pipeline may write the same bricks in any order. This crate
//! normalizes both sets with a Morton (Z-order) sort on the lower corner and
//! then compares them position by position, stopping at the first divergence.
//!
//! # Design Principles
//!
//! - **Deterministic** - The canonical order is total, so sorting is idempotent.
//! - **First divergence only** - A [`Verdict`] names one field of one record.
//! - **Values, not errors** - A mismatch is an outcome, not a failure.
//!
//! # Example
//!
//! ```
//! use canon::{compare_unordered, Verdict};
//! use record::{Brick, Vec3i};
//!
//! let brick = |x| Brick {
//!     lower: Vec3i::new(x, 0, 0),
//!     level: 0,
//!     num_cubes: Vec3i::splat(1),
//!     scalar_ids: vec![1; 8],
//! };
//! let verdict = compare_unordered(vec![brick(1), brick(0)], vec![brick(0), brick(1)]);
//! assert_eq!(verdict, Verdict::Match { records: 2 });
//! ```

mod compare;
mod morton;
mod order;

pub use compare::{
    compare_sorted, compare_unordered, FieldMismatch, Predecessor, RecordMismatch, Verdict,
};
pub use morton::{morton_encode, morton_key, MortonKey, AXIS_BITS};
pub use order::{canonical_cmp, canonical_sort, is_canonical};
