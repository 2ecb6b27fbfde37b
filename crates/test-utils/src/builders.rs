#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};
use tempfile::TempDir;
use tss_config::config::ConfigFormat;

/// Builder for config documents, serialisable to either supported format.
#[derive(Debug, Clone, Default)]
pub struct ConfigDocBuilder {
    doc: Map<String, Value>,
}

impl ConfigDocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with both required identifiers set.
    pub fn pipeline(dataset: &str, camera_name: &str) -> Self {
        Self::new().dataset(dataset).camera_name(camera_name)
    }

    /// Set `data.dataset`, creating (or replacing a non-mapping) `data`.
    pub fn dataset(mut self, dataset: &str) -> Self {
        let data = self
            .doc
            .entry("data")
            .or_insert_with(|| Value::Object(Map::new()));
        if !data.is_object() {
            *data = Value::Object(Map::new());
        }
        if let Value::Object(data) = data {
            data.insert("dataset".to_string(), Value::from(dataset));
        }
        self
    }

    pub fn camera_name(mut self, camera_name: &str) -> Self {
        self.doc
            .insert("camera_name".to_string(), Value::from(camera_name));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.doc.insert(key.to_string(), value);
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.doc.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.doc)
    }
}

/// Temporary directory holding config files and a base data directory.
pub struct ConfigWorkspace {
    dir: TempDir,
}

impl ConfigWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Base data directory for derived outputs. Not created up front.
    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    /// Write `contents` verbatim to `<root>/<file_name>`.
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Serialise `doc` in `format` and write it to `<root>/<stem>.<ext>`.
    pub fn write_doc(&self, stem: &str, format: ConfigFormat, doc: &Value) -> Result<PathBuf> {
        let contents = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(doc)?,
            ConfigFormat::Yaml => serde_yaml::to_string(doc)?,
        };
        self.write(&format!("{stem}.{}", format.extension()), &contents)
    }
}
