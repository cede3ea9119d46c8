//! Dotted paths into generic JSON values
//!
//! A path such as `im:image.-1.label` walks object keys and array indexes.
//! Numeric segments index arrays (negative values count from the end) and are
//! treated as plain keys when the current value is an object. Keys may contain
//! any character except `.`, which covers namespaced feed keys like `im:price`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path, rejecting empty paths and empty segments
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("field path is empty".to_string());
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if let Some(pos) = segments.iter().position(|s| s.is_empty()) {
            return Err(format!(
                "field path '{trimmed}' has an empty segment at position {pos}"
            ));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the path starting at `root`
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| step(current, segment))
    }

    /// Walk the path starting at an object's fields
    pub fn resolve_in<'a>(&self, fields: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let start = fields.get(first)?;
        rest.iter()
            .try_fold(start, |current, segment| step(current, segment))
    }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index: i64 = segment.parse().ok()?;
            let len = items.len() as i64;
            let resolved = if index < 0 { len + index } else { index };
            if (0..len).contains(&resolved) {
                items.get(resolved as usize)
            } else {
                None
            }
        }
        _ => None,
    }
}

impl TryFrom<String> for FieldPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
