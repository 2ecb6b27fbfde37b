// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{CAMERA_NAME_FIELD, Config, DATASET_FIELD};
use crate::config::namespace::Namespace;
use crate::errors::{ConfigError, Result};

impl TryFrom<Namespace> for Config {
    type Error = ConfigError;

    fn try_from(namespace: Namespace) -> std::result::Result<Self, Self::Error> {
        let dataset = require_relative_path(&namespace, DATASET_FIELD)?;
        let camera_name = require_relative_path(&namespace, CAMERA_NAME_FIELD)?;
        Ok(Config::new_unchecked(namespace, dataset, camera_name))
    }
}

/// Read a required string field that will be joined under the base data
/// directory.
///
/// The value must be a non-empty relative path that stays below the
/// directory it is joined onto: nested names such as `kitti/2011_09_26`
/// are fine, absolute paths and `..` segments are not.
fn require_relative_path(namespace: &Namespace, field: &str) -> Result<String> {
    let value = namespace.require_str(field)?;

    let invalid = |reason: &str| ConfigError::InvalidField {
        field: field.to_string(),
        reason: format!("{reason} (got {value:?})"),
    };

    if value.is_empty() {
        return Err(invalid("must not be empty"));
    }

    for component in Path::new(value).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("must not contain `..`")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be a relative path"));
            }
        }
    }

    Ok(value.to_string())
}
