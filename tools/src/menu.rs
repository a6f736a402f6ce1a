//! Interactive recipe menu over a line-based text stream.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use recipes::{GenConfig, LevelSink, Recipe, RecipeError};
use record::Vec3i;
use tracing::debug;

const SEPARATOR: &str = "-----------------------------------------------------";
const CHOICE_PROMPT: &str = "Choose level type: 1 = one scarce level, 2 = set of dense splitted levels, \
3 = set of deep levels, 4 = one dense level, 5 = 20 dense levels with 280x280x280 cubes, 6 = done";
const LEVEL_PROMPT: &str = "Enter the level you want to generate as an integer:";
const SIZE_PROMPT: &str = "Enter the level size in macrocells you want to generate:";

/// Result of reading one value from the input.
enum Input<T> {
    Value(T),
    Invalid(String),
    Eof,
}

/// A prompt/answer session reading whitespace-separated integers.
///
/// Tokens may be spread over lines or share one line, as long as they come
/// in prompt order.
pub struct MenuSession<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Prompts until the user picks a recipe.
    ///
    /// Returns `None` when the user chooses to exit or input ends.
    pub fn next_recipe(&mut self) -> io::Result<Option<Recipe>> {
        loop {
            writeln!(self.output, "{SEPARATOR}")?;
            writeln!(self.output, "{CHOICE_PROMPT}")?;
            let choice = match self.read_int()? {
                Input::Value(choice) => choice,
                Input::Invalid(_) => {
                    writeln!(self.output, "no input")?;
                    continue;
                }
                Input::Eof => return Ok(None),
            };

            let recipe = match choice {
                1 => self.read_level_and_size(|level, world_size| Recipe::Scarce {
                    level,
                    world_size,
                })?,
                2 => self.read_level(|level| Recipe::Split { level })?,
                3 => self.read_level(|level| Recipe::Deep { level })?,
                4 => self.read_level_and_size(|level, world_size| Recipe::Dense {
                    level,
                    world_size,
                })?,
                5 => Input::Value(Recipe::DensePreset),
                6 => return Ok(None),
                _ => {
                    writeln!(self.output, "no input")?;
                    continue;
                }
            };

            match recipe {
                Input::Value(recipe) => return Ok(Some(recipe)),
                Input::Invalid(token) => {
                    writeln!(self.output, "expected an integer, got `{token}`")?;
                }
                Input::Eof => return Ok(None),
            }
        }
    }

    /// Writes one line to the session output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn read_level(&mut self, build: impl FnOnce(i32) -> Recipe) -> io::Result<Input<Recipe>> {
        writeln!(self.output, "{LEVEL_PROMPT}")?;
        Ok(match self.read_int()? {
            Input::Value(level) => Input::Value(build(level)),
            Input::Invalid(token) => Input::Invalid(token),
            Input::Eof => Input::Eof,
        })
    }

    fn read_level_and_size(
        &mut self,
        build: impl FnOnce(i32, Vec3i) -> Recipe,
    ) -> io::Result<Input<Recipe>> {
        writeln!(self.output, "{LEVEL_PROMPT}")?;
        let level = match self.read_int()? {
            Input::Value(level) => level,
            Input::Invalid(token) => return Ok(Input::Invalid(token)),
            Input::Eof => return Ok(Input::Eof),
        };
        writeln!(self.output, "{SIZE_PROMPT}")?;
        let mut size = [0i32; 3];
        for axis in &mut size {
            match self.read_int()? {
                Input::Value(value) => *axis = value,
                Input::Invalid(token) => return Ok(Input::Invalid(token)),
                Input::Eof => return Ok(Input::Eof),
            }
        }
        Ok(Input::Value(build(level, Vec3i::from(size))))
    }

    fn read_int(&mut self) -> io::Result<Input<i32>> {
        self.output.flush()?;
        Ok(match self.next_token()? {
            Some(token) => match token.parse() {
                Ok(value) => Input::Value(value),
                Err(_) => Input::Invalid(token),
            },
            None => Input::Eof,
        })
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

/// Runs recipes chosen from the menu until the user exits.
///
/// Invalid parameters are reported and the menu continues; a failed write
/// ends the session with an error. Returns the number of recipes run.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut MenuSession<R, W>,
    config: &GenConfig,
    sink: &mut impl LevelSink,
) -> Result<usize> {
    let mut completed = 0;
    while let Some(recipe) = session.next_recipe()? {
        debug!(recipe = recipe.name(), "menu selection");
        match recipe.run(config, sink) {
            Ok(_) => completed += 1,
            Err(err @ RecipeError::Io { .. }) => return Err(err.into()),
            Err(err) => session.say(err)?,
        }
    }
    Ok(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipes::MemorySink;

    fn session(input: &str) -> MenuSession<&[u8], Vec<u8>> {
        MenuSession::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn scarce_reads_level_then_size() {
        let mut menu = session("1\n0\n2 1 1\n");
        assert_eq!(
            menu.next_recipe().unwrap(),
            Some(Recipe::Scarce {
                level: 0,
                world_size: Vec3i::new(2, 1, 1)
            })
        );
        let text = String::from_utf8(menu.output).unwrap();
        assert!(text.contains(LEVEL_PROMPT));
        assert!(text.contains(SIZE_PROMPT));
    }

    #[test]
    fn tokens_may_share_a_line() {
        let mut menu = session("4 2 3 1 1 2\n3 5\n");
        assert_eq!(
            menu.next_recipe().unwrap(),
            Some(Recipe::Dense {
                level: 2,
                world_size: Vec3i::new(3, 1, 1)
            })
        );
        assert_eq!(menu.next_recipe().unwrap(), Some(Recipe::Deep { level: 5 }));
        assert_eq!(menu.next_recipe().unwrap(), None);
    }

    #[test]
    fn every_choice_maps_to_a_recipe() {
        let mut menu = session("2 4\n5\n6\n");
        assert_eq!(menu.next_recipe().unwrap(), Some(Recipe::Split { level: 4 }));
        assert_eq!(menu.next_recipe().unwrap(), Some(Recipe::DensePreset));
        assert_eq!(menu.next_recipe().unwrap(), None);
    }

    #[test]
    fn unknown_choice_prints_no_input_and_loops() {
        let mut menu = session("9\nabc\n3 1\n");
        assert_eq!(menu.next_recipe().unwrap(), Some(Recipe::Deep { level: 1 }));
        let text = String::from_utf8(menu.output).unwrap();
        assert_eq!(text.matches("no input").count(), 2);
    }

    #[test]
    fn invalid_parameter_restarts_menu() {
        let mut menu = session("1\nx\n3 0\n");
        assert_eq!(menu.next_recipe().unwrap(), Some(Recipe::Deep { level: 0 }));
        let text = String::from_utf8(menu.output).unwrap();
        assert!(text.contains("expected an integer, got `x`"));
    }

    #[test]
    fn eof_mid_prompt_exits() {
        let mut menu = session("1\n0\n2 1");
        assert_eq!(menu.next_recipe().unwrap(), None);
    }

    #[test]
    fn run_menu_reports_invalid_levels_and_continues() {
        let mut menu = session("3 40\n3 1\n6\n");
        let mut sink = MemorySink::new();
        let completed = run_menu(&mut menu, &GenConfig::for_testing(), &mut sink).unwrap();
        assert_eq!(completed, 1);
        assert_eq!(sink.levels.len(), 2);
        let text = String::from_utf8(menu.output).unwrap();
        assert!(text.contains("invalid level 40"));
    }
}
