use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use canon::Verdict;
use clap::{Parser, ValueEnum};
use cubefix_tools::{
    compare_directories, compare_files, exit_status, init_tracing, verdict_status, CompareOptions,
    PairReport, RecordKind,
};
use record::TailPolicy;

#[derive(Parser)]
#[command(
    name = "brickcmp",
    version,
    about = "Compare two brick fixture files independent of record order"
)]
struct Cli {
    /// Original file, or directory of files.
    original: PathBuf,
    /// File or directory to compare against the original.
    comparison: PathBuf,
    /// Record layout of the inputs.
    #[arg(long, value_enum, default_value_t = Records::Bricks)]
    records: Records,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    output: OutputFormat,
    /// Treat a partial final record as the end of the file.
    #[arg(long)]
    lenient: bool,
    /// File name filter when comparing directories.
    #[arg(long, default_value = "*")]
    glob: String,
    /// Log at debug level.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Records {
    Bricks,
    Cubes,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let options = CompareOptions {
        records: match cli.records {
            Records::Bricks => RecordKind::Bricks,
            Records::Cubes => RecordKind::Cubes,
        },
        policy: if cli.lenient {
            TailPolicy::Lenient
        } else {
            TailPolicy::Strict
        },
        ..CompareOptions::default()
    };

    let status = if cli.original.is_dir() && cli.comparison.is_dir() {
        let reports =
            compare_directories(&cli.original, &cli.comparison, Some(&cli.glob), &options)?;
        print_reports(&reports, cli.output)?;
        exit_status(&reports)
    } else {
        let verdict = compare_files(&cli.original, &cli.comparison, &options)?;
        print_verdict(&verdict, cli.output)?;
        verdict_status(&verdict)
    };

    Ok(ExitCode::from(status))
}

fn print_verdict(verdict: &Verdict, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Pretty => {
            println!("first file - original, second file - to be compared");
            println!("{verdict}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(verdict).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_reports(reports: &[PairReport], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Pretty => {
            println!("first directory - original, second directory - to be compared");
            for report in reports {
                println!("{report}");
            }
            let matched = reports.iter().filter(|report| report.is_match()).count();
            println!("{matched} of {} files match", reports.len());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(reports).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}
