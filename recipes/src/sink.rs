//! Destinations for finished levels.

use std::fs;
use std::path::{Path, PathBuf};

use record::{encode_cubes, level_file_name, Cube};
use tracing::info;

use crate::error::{RecipeError, RecipeResult};

/// Receives each level a recipe produces, in generation order.
pub trait LevelSink {
    /// Stores one level of cubes under `<tag>_<level>.cubes`.
    fn write_level(&mut self, tag: &str, level: i32, cubes: &[Cube]) -> RecipeResult<()>;
}

impl<S: LevelSink + ?Sized> LevelSink for &mut S {
    fn write_level(&mut self, tag: &str, level: i32, cubes: &[Cube]) -> RecipeResult<()> {
        (**self).write_level(tag, level, cubes)
    }
}

/// Writes every level to its own file in a directory.
///
/// Each call opens, writes and closes one file; the records are written
/// back to back with no header.
#[derive(Debug, Clone)]
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    /// Creates a sink writing into `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Directory the level files are written to.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl LevelSink for FileSink {
    fn write_level(&mut self, tag: &str, level: i32, cubes: &[Cube]) -> RecipeResult<()> {
        let path = self.out_dir.join(level_file_name(tag, level));
        fs::write(&path, encode_cubes(cubes)).map_err(|source| RecipeError::Io {
            path: path.clone(),
            source,
        })?;
        info!(file = %path.display(), records = cubes.len(), "done writing level");
        Ok(())
    }
}

/// A level captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenLevel {
    pub file_name: String,
    pub level: i32,
    pub cubes: Vec<Cube>,
}

/// Keeps written levels in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub levels: Vec<WrittenLevel>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a level by file name.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&WrittenLevel> {
        self.levels.iter().find(|level| level.file_name == file_name)
    }
}

impl LevelSink for MemorySink {
    fn write_level(&mut self, tag: &str, level: i32, cubes: &[Cube]) -> RecipeResult<()> {
        self.levels.push(WrittenLevel {
            file_name: level_file_name(tag, level),
            level,
            cubes: cubes.to_vec(),
        });
        Ok(())
    }
}

/// Prints the lower corner of every cube to stdout after delegating.
#[derive(Debug)]
pub struct EchoSink<S> {
    inner: S,
}

impl<S: LevelSink> EchoSink<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LevelSink> LevelSink for EchoSink<S> {
    fn write_level(&mut self, tag: &str, level: i32, cubes: &[Cube]) -> RecipeResult<()> {
        self.inner.write_level(tag, level, cubes)?;
        println!("print cubes.lower for {tag}_{level}");
        for cube in cubes {
            println!("{}", cube.lower);
        }
        println!();
        Ok(())
    }
}
