// src/dirs.rs

//! Derive the pipeline output directories and provision them on disk.

use std::path::Path;

use tracing::{info, warn};

use crate::config::{Config, DIRS_KEY, OutputDirs};
use crate::errors::Result;
use crate::fs::{FileSystem, create_dirs};

/// Attach freshly derived [`OutputDirs`] to `config` and create them.
///
/// Any existing `dirs` entry is replaced. Calling this again with the same
/// inputs yields the same `dirs` and succeeds against directories that
/// already exist.
pub fn augment(
    fs: &dyn FileSystem,
    mut config: Config,
    base_data_dir: impl AsRef<Path>,
) -> Result<Config> {
    let dirs = OutputDirs::derive(
        base_data_dir.as_ref(),
        config.dataset(),
        config.camera_name(),
    );

    let replaced = config
        .set_dirs(dirs.clone())?
        .filter(|previous| config.namespace().get(DIRS_KEY) != Some(previous));
    if let Some(previous) = replaced {
        warn!(?previous, "replacing existing `{}` section", DIRS_KEY);
    }

    create_dirs(fs, &dirs.paths())?;

    info!(
        data_output_dir = ?dirs.data_output_dir,
        camera_output_dir = ?dirs.camera_output_dir,
        "output directories ready"
    );
    Ok(config)
}
