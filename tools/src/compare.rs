//! File and directory comparison for brick fixtures.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use canon::{compare_unordered, Verdict};
use glob::Pattern;
use record::{decode_bricks, decode_cubes, Brick, Limits, TailPolicy};
use serde::Serialize;
use tracing::{debug, warn};

/// Record layout of the files being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// Variable-length brick records.
    #[default]
    Bricks,
    /// Fixed 48-byte cube records, compared as 1x1x1 bricks.
    Cubes,
}

/// How files are read before comparing.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub records: RecordKind,
    pub policy: TailPolicy,
    pub limits: Limits,
}

/// Reads one fixture file as a brick set.
pub fn load_bricks(path: &Path, options: &CompareOptions) -> Result<Vec<Brick>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    match options.records {
        RecordKind::Bricks => {
            let decoded = decode_bricks(&bytes, &options.limits, options.policy)
                .with_context(|| format!("decode bricks from {}", path.display()))?;
            if decoded.discarded_bytes > 0 {
                warn!(
                    file = %path.display(),
                    bytes = decoded.discarded_bytes,
                    "discarded partial trailing record"
                );
            }
            Ok(decoded.bricks)
        }
        RecordKind::Cubes => {
            let cubes = decode_cubes(&bytes, &options.limits)
                .with_context(|| format!("decode cubes from {}", path.display()))?;
            cubes
                .into_iter()
                .map(Brick::try_from)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("convert cubes from {}", path.display()))
        }
    }
}

/// Loads and compares two fixture files.
pub fn compare_files(original: &Path, comparison: &Path, options: &CompareOptions) -> Result<Verdict> {
    let orig = load_bricks(original, options)?;
    let comp = load_bricks(comparison, options)?;
    debug!(
        original = orig.len(),
        comparison = comp.len(),
        "loaded record sets"
    );
    Ok(compare_unordered(orig, comp))
}

/// Exit status of a run: 0 when every pair matched, 1 otherwise.
///
/// Missing counterparts and unreadable files count as mismatches.
#[must_use]
pub fn exit_status(reports: &[PairReport]) -> u8 {
    u8::from(!reports.iter().all(PairReport::is_match))
}

/// Exit status of a single-file comparison.
#[must_use]
pub const fn verdict_status(verdict: &Verdict) -> u8 {
    if verdict.is_match() {
        0
    } else {
        1
    }
}

/// Result for one file name in a directory comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

impl PairReport {
    /// Returns `true` if both files exist and match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(&self.outcome, PairOutcome::Compared { verdict } if verdict.is_match())
    }
}

/// Per-name outcome of a directory comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    Compared { verdict: Verdict },
    MissingComparison,
    MissingOriginal,
    /// Either file could not be read or decoded.
    ReadError { message: String },
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        match &self.outcome {
            PairOutcome::Compared { verdict } => write!(f, "{verdict}"),
            PairOutcome::MissingComparison => write!(f, "missing in comparison directory"),
            PairOutcome::MissingOriginal => write!(f, "missing in original directory"),
            PairOutcome::ReadError { message } => write!(f, "read error: {message}"),
        }
    }
}

/// Compares files with the same name in two directories.
///
/// Only regular files whose name matches `glob` (all files when `None`) take
/// part. Reports come back sorted by name. A pair that fails to load is
/// reported as [`PairOutcome::ReadError`] and the remaining pairs are still
/// compared.
pub fn compare_directories(
    original: &Path,
    comparison: &Path,
    glob: Option<&str>,
    options: &CompareOptions,
) -> Result<Vec<PairReport>> {
    let pattern = glob
        .map(|value| Pattern::new(value).context("invalid glob pattern"))
        .transpose()?;
    let orig_names = file_names(original, pattern.as_ref())?;
    let comp_names = file_names(comparison, pattern.as_ref())?;

    let mut reports = Vec::new();
    for name in orig_names.union(&comp_names) {
        let outcome = match (orig_names.contains(name), comp_names.contains(name)) {
            (true, true) => {
                match compare_files(&original.join(name), &comparison.join(name), options) {
                    Ok(verdict) => PairOutcome::Compared { verdict },
                    Err(err) => {
                        warn!(file = %name, "could not compare: {err:#}");
                        PairOutcome::ReadError {
                            message: format!("{err:#}"),
                        }
                    }
                }
            }
            (true, false) => PairOutcome::MissingComparison,
            _ => PairOutcome::MissingOriginal,
        };
        reports.push(PairReport {
            name: name.clone(),
            outcome,
        });
    }
    Ok(reports)
}

fn file_names(dir: &Path, pattern: Option<&Pattern>) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if pattern.is_some_and(|pattern| !pattern.matches(&name)) {
            continue;
        }
        names.insert(name);
    }
    Ok(names)
}
