// src/config/mod.rs

//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Detect the file format from its extension (`format.rs`).
//! - Read and deserialize a config file (`loader.rs`).
//! - Mirror the document as an attribute-addressable tree (`namespace.rs`).
//! - Define the typed config and derived directories (`model.rs`).
//! - Validate the fields required for directory derivation (`validate.rs`).

pub mod format;
pub mod loader;
pub mod model;
pub mod namespace;
pub mod validate;

pub use format::ConfigFormat;
pub use loader::{load_and_validate, load_raw, parse_str};
pub use model::{CAMERA_NAME_FIELD, Config, DATASET_FIELD, DIRS_KEY, OutputDirs};
pub use namespace::{Namespace, Node, RawConfig};
