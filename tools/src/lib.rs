//! Shared plumbing for the `cubegen` and `brickcmp` command-line tools.
//!
//! - [`menu`] drives the interactive recipe prompt of `cubegen`.
//! - [`compare`] loads fixture files and compares them file by file or
//!   directory by directory for `brickcmp`.

pub mod compare;
pub mod menu;

pub use compare::{
    compare_directories, compare_files, exit_status, load_bricks, verdict_status, CompareOptions,
    PairOutcome, PairReport, RecordKind,
};
pub use menu::{run_menu, MenuSession};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `debug` is true.
pub fn init_tracing(debug: bool) {
    let default = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
