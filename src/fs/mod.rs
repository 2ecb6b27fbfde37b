// src/fs/mod.rs

//! Filesystem seam used for reading config files and provisioning output
//! directories.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{ConfigError, Result};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create `path` and any missing parents.
    ///
    /// Must succeed when the directory already exists, including when another
    /// process creates it concurrently.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        // std already treats "exists as a directory" (even if it appeared
        // mid-call) as success.
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Ensure every path in `paths` exists as a directory, in order.
///
/// Stops at the first failure. Paths that already exist are left untouched.
pub fn create_dirs<P: AsRef<Path>>(fs: &dyn FileSystem, paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if fs.is_dir(path) {
            debug!(?path, "directory already exists");
            continue;
        }
        fs.create_dir_all(path)
            .map_err(|source| ConfigError::Filesystem {
                path: PathBuf::from(path),
                source,
            })?;
        info!(?path, "created directory");
    }
    Ok(())
}
