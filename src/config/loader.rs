// src/config/loader.rs

use std::io;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::config::format::ConfigFormat;
use crate::config::model::Config;
use crate::config::namespace::{Namespace, RawConfig};
use crate::errors::{ConfigError, Result};
use crate::fs::FileSystem;

/// Load a configuration file and return the untyped [`RawConfig`].
///
/// The format is picked from the extension before the file is opened, so an
/// unsupported extension never touches the filesystem. This only performs
/// deserialization; use [`load_and_validate`] to get a typed [`Config`].
pub fn load_raw(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    debug!(?path, %format, "detected config format");

    let contents = fs.read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_str(path, format, &contents)
}

/// Deserialize `contents` as a single document of the given format.
///
/// Both formats land in the YAML value model, which keeps non-finite floats
/// and YAML tags. YAML merge keys (`<<: *anchor`) are applied. The top level
/// must be a mapping, and mapping keys anywhere must be scalars.
pub fn parse_str(path: &Path, format: ConfigFormat, contents: &str) -> Result<RawConfig> {
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    let value: Value = match format {
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Yaml => {
            let mut value: Value =
                serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;
            value
                .apply_merge()
                .map_err(|e| parse_error(format!("resolving merge keys: {e}")))?;
            value
        }
    };

    check_keys(&value).map_err(parse_error)?;

    match value {
        Value::Mapping(map) => {
            debug!(?path, keys = map.len(), "parsed config document");
            Ok(map)
        }
        other => Err(parse_error(format!(
            "top-level value must be a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

/// Load a configuration file, build its namespace, and validate the fields
/// needed for directory derivation.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Config> {
    let raw = load_raw(fs, path)?;
    Config::try_from(Namespace::from(raw))
}

/// Reject sequence or mapping keys; scalar keys are turned into field names
/// when the namespace is built.
fn check_keys(value: &Value) -> std::result::Result<(), String> {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                if matches!(key, Value::Sequence(_) | Value::Mapping(_)) {
                    return Err(format!(
                        "mapping keys must be scalars, found {}",
                        value_kind(key)
                    ));
                }
                check_keys(child)?;
            }
            Ok(())
        }
        Value::Sequence(items) => items.iter().try_for_each(check_keys),
        Value::Tagged(tagged) => check_keys(&tagged.value),
        _ => Ok(()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(tagged) => value_kind(&tagged.value),
    }
}
