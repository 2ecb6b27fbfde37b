// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::config::namespace::{Namespace, Node};
use crate::errors::{ConfigError, Result};

/// Reserved top-level key that holds the derived output directories.
pub const DIRS_KEY: &str = "dirs";

/// Dotted path of the dataset identifier.
pub const DATASET_FIELD: &str = "data.dataset";

/// Dotted path of the camera identifier.
pub const CAMERA_NAME_FIELD: &str = "camera_name";

/// A validated configuration.
///
/// Wraps the full [`Namespace`] loaded from disk, plus typed copies of the
/// fields this crate relies on. Built through `Config::try_from(Namespace)`,
/// which rejects a missing or unusable `data.dataset` / `camera_name` up
/// front.
///
/// Serializes as the underlying namespace, including `dirs` once attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    namespace: Namespace,
    dataset: String,
    camera_name: String,
    dirs: Option<OutputDirs>,
}

impl Config {
    /// Build a `Config` from parts that have already been validated.
    pub(crate) fn new_unchecked(namespace: Namespace, dataset: String, camera_name: String) -> Self {
        Self {
            namespace,
            dataset,
            camera_name,
            dirs: None,
        }
    }

    /// `data.dataset`
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// `camera_name`
    pub fn camera_name(&self) -> &str {
        &self.camera_name
    }

    /// Derived output directories; `None` until the config has been augmented.
    pub fn dirs(&self) -> Option<&OutputDirs> {
        self.dirs.as_ref()
    }

    /// Every field from the source file (and `dirs`, once attached).
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn into_namespace(self) -> Namespace {
        self.namespace
    }

    /// Shorthand for `self.namespace().lookup(path)`.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        self.namespace.lookup(path)
    }

    /// Replace the `dirs` sub-structure, returning whatever the namespace
    /// previously held under that key (which may have come from the file).
    ///
    /// Leaves the config untouched if either path is not valid UTF-8.
    pub(crate) fn set_dirs(&mut self, dirs: OutputDirs) -> Result<Option<Node>> {
        let section = dirs.to_namespace()?;
        let previous = self.namespace.insert(DIRS_KEY, section);
        self.dirs = Some(dirs);
        Ok(previous)
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.namespace.serialize(serializer)
    }
}

/// Output directories derived from the base data directory, the dataset and
/// the camera.
///
/// ```text
/// <base>/<dataset>/outputs            data_output_dir
/// <base>/<dataset>/outputs/<camera>   camera_output_dir
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDirs {
    pub data_output_dir: PathBuf,
    pub camera_output_dir: PathBuf,
}

impl OutputDirs {
    pub fn derive(base_data_dir: &Path, dataset: &str, camera_name: &str) -> Self {
        let data_output_dir = base_data_dir.join(dataset).join("outputs");
        let camera_output_dir = data_output_dir.join(camera_name);
        Self {
            data_output_dir,
            camera_output_dir,
        }
    }

    /// Both directories, in provisioning order.
    pub fn paths(&self) -> [&Path; 2] {
        [&self.data_output_dir, &self.camera_output_dir]
    }

    /// The `dirs` section as stored in the namespace: both paths as strings.
    fn to_namespace(&self) -> Result<Namespace> {
        let mut ns = Namespace::new();
        for (key, path) in [
            ("data_output_dir", &self.data_output_dir),
            ("camera_output_dir", &self.camera_output_dir),
        ] {
            let text = path.to_str().ok_or_else(|| ConfigError::InvalidField {
                field: format!("{DIRS_KEY}.{key}"),
                reason: format!("derived path {path:?} is not valid UTF-8"),
            })?;
            ns.insert(key, text);
        }
        Ok(ns)
    }
}
