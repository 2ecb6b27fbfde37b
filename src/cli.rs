// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::Parser;
use tracing::Level;

/// Command-line arguments for `tss-config`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tss-config",
    version,
    about = "Load a JSON/YAML pipeline config and provision its output directories.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (`.json` or `.yaml`).
    #[arg(long, value_name = "PATH")]
    pub config: String,

    /// Base data directory under which `<dataset>/outputs` is created.
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TSS_CONFIG_LOG` or `info` is used.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<Level>,

    /// Parse + validate and print the derived directories, but don't create
    /// anything.
    #[arg(long)]
    pub dry_run: bool,
}
