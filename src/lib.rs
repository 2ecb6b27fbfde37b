// src/lib.rs

pub mod cli;
pub mod config;
pub mod dirs;
pub mod errors;
pub mod fs;
pub mod logging;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{Config, OutputDirs, load_and_validate};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load `config_path`, derive the output directories under `base_data_dir`,
/// create them, and return the augmented config.
///
/// Uses the real filesystem; see [`process_config_with`] to supply another.
pub fn process_config(
    config_path: impl AsRef<Path>,
    base_data_dir: impl AsRef<Path>,
) -> Result<Config> {
    process_config_with(&RealFileSystem, config_path, base_data_dir)
}

/// Same as [`process_config`], reading and provisioning through `fs`.
///
/// Steps run in order and the first failure is returned as-is:
/// parse → namespace → validate → derive + provision `dirs`.
pub fn process_config_with(
    fs: &dyn FileSystem,
    config_path: impl AsRef<Path>,
    base_data_dir: impl AsRef<Path>,
) -> Result<Config> {
    let config_path = config_path.as_ref();
    let config = load_and_validate(fs, config_path)?;
    debug!(
        path = ?config_path,
        dataset = config.dataset(),
        camera_name = config.camera_name(),
        "config loaded"
    );
    dirs::augment(fs, config, base_data_dir)
}

/// High-level entry point used by `main.rs`.
///
/// Prints the processed config as pretty JSON on stdout. With `--dry-run`
/// only the derived directories are printed and nothing is created.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let config_path = PathBuf::from(&args.config);
    let base_data_dir = PathBuf::from(&args.data_dir);

    if args.dry_run {
        let config = load_and_validate(&RealFileSystem, &config_path)
            .with_context(|| format!("loading config {:?}", config_path))?;
        let dirs = OutputDirs::derive(&base_data_dir, config.dataset(), config.camera_name());
        print_dry_run(&config_path, &config, &dirs);
        return Ok(());
    }

    let config = process_config(&config_path, &base_data_dir)
        .with_context(|| format!("processing config {:?}", config_path))?;
    info!(path = ?config_path, "config processed");

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Simple dry-run output: identifiers and the directories that would be created.
fn print_dry_run(config_path: &Path, config: &Config, dirs: &OutputDirs) {
    println!("tss-config dry-run");
    println!("  config = {}", config_path.display());
    println!("  data.dataset = {}", config.dataset());
    println!("  camera_name = {}", config.camera_name());
    println!();
    println!("dirs:");
    println!("  data_output_dir: {}", dirs.data_output_dir.display());
    println!("  camera_output_dir: {}", dirs.camera_output_dir.display());

    debug!("dry-run complete (no directories created)");
}
