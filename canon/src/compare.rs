//! Structural comparison of two canonically ordered brick sets.

use std::fmt;

use record::{Brick, Vec3i};

use crate::order::canonical_sort;

/// Outcome of comparing an original record set with a comparison set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "verdict", rename_all = "snake_case")
)]
pub enum Verdict {
    /// Every record matched.
    Match { records: usize },
    /// The sets hold a different number of records.
    SizeMismatch { original: usize, comparison: usize },
    /// The first records disagree on the level.
    LevelMismatch { original: i32, comparison: i32 },
    /// A record differs in one field.
    RecordMismatch(RecordMismatch),
}

impl Verdict {
    /// Returns `true` if no divergence was found.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// The first differing record in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RecordMismatch {
    /// Index in canonical order.
    pub index: usize,
    /// The field that differs.
    pub field: FieldMismatch,
    /// The record from the original set.
    pub original: Brick,
    /// The record from the comparison set.
    pub comparison: Brick,
    /// The records just before `index`, reported with scalar mismatches.
    pub predecessor: Option<Predecessor>,
}

/// Records preceding a scalar mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Predecessor {
    pub original: Brick,
    pub comparison: Brick,
}

/// Which field of a record differs, with both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "field", rename_all = "snake_case")
)]
pub enum FieldMismatch {
    Lower { original: Vec3i, comparison: Vec3i },
    Scalar {
        slot: usize,
        original: i32,
        comparison: i32,
    },
    NumCubes { original: Vec3i, comparison: Vec3i },
}

/// Compares two record sets that are already in canonical order.
///
/// Stops at the first divergence: set size, then the level of the first
/// record, then per record `lower`, scalars and extent.
pub fn compare_sorted(original: &[Brick], comparison: &[Brick]) -> Verdict {
    if original.len() != comparison.len() {
        return Verdict::SizeMismatch {
            original: original.len(),
            comparison: comparison.len(),
        };
    }

    let (Some(first_orig), Some(first_comp)) = (original.first(), comparison.first()) else {
        return Verdict::Match { records: 0 };
    };
    if first_orig.level != first_comp.level {
        return Verdict::LevelMismatch {
            original: first_orig.level,
            comparison: first_comp.level,
        };
    }

    for (index, (orig, comp)) in original.iter().zip(comparison).enumerate() {
        if let Some(field) = field_mismatch(orig, comp) {
            let predecessor = match field {
                FieldMismatch::Scalar { .. } if index > 0 => Some(Predecessor {
                    original: original[index - 1].clone(),
                    comparison: comparison[index - 1].clone(),
                }),
                _ => None,
            };
            return Verdict::RecordMismatch(RecordMismatch {
                index,
                field,
                original: orig.clone(),
                comparison: comp.clone(),
                predecessor,
            });
        }
    }

    Verdict::Match {
        records: original.len(),
    }
}

/// Sorts both sets canonically, then compares them.
pub fn compare_unordered(mut original: Vec<Brick>, mut comparison: Vec<Brick>) -> Verdict {
    canonical_sort(&mut original);
    canonical_sort(&mut comparison);
    compare_sorted(&original, &comparison)
}

fn field_mismatch(orig: &Brick, comp: &Brick) -> Option<FieldMismatch> {
    if orig.lower != comp.lower {
        return Some(FieldMismatch::Lower {
            original: orig.lower,
            comparison: comp.lower,
        });
    }

    let scalar = orig
        .scalar_ids
        .iter()
        .zip(&comp.scalar_ids)
        .enumerate()
        .find(|(_, (a, b))| a != b);
    if let Some((slot, (&original, &comparison))) = scalar {
        return Some(FieldMismatch::Scalar {
            slot,
            original,
            comparison,
        });
    }

    if orig.num_cubes != comp.num_cubes {
        return Some(FieldMismatch::NumCubes {
            original: orig.num_cubes,
            comparison: comp.num_cubes,
        });
    }
    None
}

struct Scalars<'a>(&'a [i32]);

impl fmt::Display for Scalars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match { records } => {
                write!(
                    f,
                    "All tests completed. No mismatch found. ({records} bricks compared)"
                )
            }
            Self::SizeMismatch {
                original,
                comparison,
            } => {
                writeln!(f, "Size mismatch!")?;
                write!(
                    f,
                    "original number of bricks: {original}, comp. number of bricks: {comparison}"
                )
            }
            Self::LevelMismatch {
                original,
                comparison,
            } => {
                writeln!(f, "Level mismatch!")?;
                write!(f, "original level: {original}, comp. level: {comparison}")
            }
            Self::RecordMismatch(mismatch) => write!(f, "{mismatch}"),
        }
    }
}

impl fmt::Display for RecordMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        match self.field {
            FieldMismatch::Lower {
                original,
                comparison,
            } => {
                writeln!(f, "Brick lower mismatch for brick number {index}!")?;
                write!(
                    f,
                    "original lower: {original}, comp. lower: {comparison}"
                )
            }
            FieldMismatch::Scalar {
                slot,
                original,
                comparison,
            } => {
                writeln!(f, "Scalars mismatch!")?;
                writeln!(
                    f,
                    "occurred for brick {index} {} at scalar {slot}",
                    self.original.lower
                )?;
                writeln!(f, "original: {original}, comp.: {comparison}")?;
                write!(
                    f,
                    "complete: orig={} comp={}",
                    Scalars(&self.original.scalar_ids),
                    Scalars(&self.comparison.scalar_ids)
                )?;
                if let Some(prev) = &self.predecessor {
                    write!(
                        f,
                        "\nprevious {} orig={} comp={}",
                        prev.comparison.lower,
                        Scalars(&prev.original.scalar_ids),
                        Scalars(&prev.comparison.scalar_ids)
                    )?;
                }
                Ok(())
            }
            FieldMismatch::NumCubes {
                original,
                comparison,
            } => {
                writeln!(f, "Number of cubes mismatch for brick number {index}!")?;
                write!(
                    f,
                    "original number of cubes: {original}, comp. number of cubes: {comparison}"
                )
            }
        }
    }
}
