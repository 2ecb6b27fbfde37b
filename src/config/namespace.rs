// src/config/namespace.rs

//! Attribute-style access over an arbitrarily nested config document.
//!
//! A [`RawConfig`] is whatever the parser produced. [`Namespace`] mirrors it
//! one-to-one (same keys, same nesting, same leaves) but turns every nested
//! mapping into another `Namespace`, so fields can be reached either by key
//! (`ns.get("data")`) or by dotted path (`ns.lookup("data.dataset")`).

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::{Mapping, Number, Value};

use crate::errors::{ConfigError, Result};

/// Untyped top-level mapping produced by deserializing a config file.
///
/// JSON documents are read into the same YAML value model, so both formats
/// share one representation.
pub type RawConfig = Mapping;

/// A single value inside a [`Namespace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<Node>),
    Map(Namespace),
}

impl Node {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Node::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Node::Map(ns) => Some(ns),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "a boolean",
            Node::Number(_) => "a number",
            Node::String(_) => "a string",
            Node::Seq(_) => "a sequence",
            Node::Map(_) => "a mapping",
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Seq(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Map(Namespace::from(map)),
            // Application tags carry no meaning here; keep the tagged value.
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<Namespace> for Node {
    fn from(value: Namespace) -> Self {
        Node::Map(value)
    }
}

/// Recursive, attribute-addressable mirror of a [`RawConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Namespace {
    fields: BTreeMap<String, Node>,
}

impl From<RawConfig> for Namespace {
    fn from(raw: RawConfig) -> Self {
        Self {
            fields: raw
                .into_iter()
                .map(|(key, value)| (field_name(key), Node::from(value)))
                .collect(),
        }
    }
}

/// Field name for a mapping key. Scalar keys such as `1` or `true` use
/// their plain text form.
fn field_name(key: Value) -> String {
    match key {
        Value::String(s) => s,
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => field_name(tagged.value),
        // The loader rejects collection keys; fall back to their YAML text.
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Nested namespace stored under `key`, if that value is a mapping.
    pub fn section(&self, key: &str) -> Option<&Namespace> {
        self.get(key).and_then(Node::as_namespace)
    }

    /// Resolve a dotted path such as `"data.dataset"`.
    ///
    /// Returns `None` if any segment is missing or an intermediate value is
    /// not a mapping.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.as_namespace()?.get(segment)?;
        }
        Some(node)
    }

    /// Like [`lookup`](Self::lookup), but an absent field is an error.
    ///
    /// Walking through a non-mapping intermediate value reports
    /// [`ConfigError::InvalidField`] on that intermediate; a missing segment
    /// reports [`ConfigError::MissingField`] with the full dotted path.
    pub fn require(&self, path: &str) -> Result<&Node> {
        let mut current = self;
        let mut walked = String::new();
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);

            let node = current
                .get(segment)
                .ok_or_else(|| ConfigError::MissingField(path.to_string()))?;

            if segments.peek().is_none() {
                return Ok(node);
            }

            current = node.as_namespace().ok_or_else(|| ConfigError::InvalidField {
                field: walked.clone(),
                reason: format!("expected a mapping, found {}", node.kind()),
            })?;
        }

        Err(ConfigError::MissingField(path.to_string()))
    }

    /// Required string field at a dotted path.
    pub fn require_str(&self, path: &str) -> Result<&str> {
        let node = self.require(path)?;
        node.as_str().ok_or_else(|| ConfigError::InvalidField {
            field: path.to_string(),
            reason: format!("expected a string, found {}", node.kind()),
        })
    }

    /// Insert or replace a top-level field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.fields.insert(key.into(), node.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
