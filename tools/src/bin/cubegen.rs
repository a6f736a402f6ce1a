use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cubefix_tools::{init_tracing, run_menu, MenuSession};
use recipes::{EchoSink, FileSink, GenConfig, LevelSink, Recipe, DEFAULT_MACROCELL_WIDTH};
use record::Vec3i;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cubegen",
    version,
    about = "Generate synthetic cube level fixture files"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Macrocell width in cells.
    #[arg(long, global = true, default_value_t = DEFAULT_MACROCELL_WIDTH)]
    mc_width: i32,
    /// Directory the level files are written to.
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,
    /// Print the lower corner of every generated cube.
    #[arg(long, global = true)]
    print_lower: bool,
    /// Log at debug level.
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// One cube per macrocell at one level.
    Scarce {
        #[command(flatten)]
        level: LevelArg,
        #[command(flatten)]
        size: SizeArg,
    },
    /// Macrocell roots split into octants down to level 0.
    Split {
        #[command(flatten)]
        level: LevelArg,
    },
    /// Nested corner shells from a level down to 0.
    Deep {
        #[command(flatten)]
        level: LevelArg,
    },
    /// Every cell of a macrocell grid at one level.
    Dense {
        #[command(flatten)]
        level: LevelArg,
        #[command(flatten)]
        size: SizeArg,
        /// Write the cubes in random order.
        #[arg(long)]
        shuffle: bool,
        /// Seed for `--shuffle`.
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,
    },
    /// 20 adjoining dense levels of 280^3 cubes.
    DensePreset,
    /// Choose recipes interactively (the default).
    Menu,
}

#[derive(Args)]
struct LevelArg {
    /// Level to generate.
    #[arg(long)]
    level: i32,
}

#[derive(Args)]
struct SizeArg {
    /// World size in macrocells.
    #[arg(
        long,
        required = true,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    size: Vec<i32>,
}

impl SizeArg {
    fn extent(&self) -> Vec3i {
        match self.size.as_slice() {
            &[x, y, z] => Vec3i::new(x, y, z),
            _ => Vec3i::default(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;
    let command = cli.command.unwrap_or(Command::Menu);
    let config = gen_config(&command, cli.mc_width);

    let sink = FileSink::new(&cli.out_dir);
    if cli.print_lower {
        run(command, &config, EchoSink::new(sink))
    } else {
        run(command, &config, sink)
    }
}

fn gen_config(command: &Command, macrocell_width: i32) -> GenConfig {
    let base = GenConfig {
        macrocell_width,
        ..GenConfig::default()
    };
    match *command {
        Command::Dense { shuffle, seed, .. } => GenConfig {
            shuffle,
            seed,
            ..base
        },
        _ => base,
    }
}

fn run(command: Command, config: &GenConfig, mut sink: impl LevelSink) -> Result<()> {
    let recipe = match command {
        Command::Scarce { level, size } => Recipe::Scarce {
            level: level.level,
            world_size: size.extent(),
        },
        Command::Split { level } => Recipe::Split { level: level.level },
        Command::Deep { level } => Recipe::Deep { level: level.level },
        Command::Dense { level, size, .. } => Recipe::Dense {
            level: level.level,
            world_size: size.extent(),
        },
        Command::DensePreset => Recipe::DensePreset,
        Command::Menu => {
            let stdin = io::stdin();
            let mut session = MenuSession::new(stdin.lock(), io::stdout());
            let completed = run_menu(&mut session, config, &mut sink)?;
            info!(recipes = completed, "menu closed");
            return Ok(());
        }
    };

    let files = recipe
        .run(config, &mut sink)
        .with_context(|| format!("{} recipe failed", recipe.name()))?;
    info!(recipe = recipe.name(), files, "generation finished");
    Ok(())
}
