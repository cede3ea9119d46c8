//! Rule engine
//!
//! Rules describe how a feed is shaped: where the entry list lives, which
//! paths carry each movie field, and how prices are read. They are plain
//! data (TOML) evaluated by pure functions over `serde_json::Value`, so the
//! same engine handles any feed whose layout can be described by paths.
//!
//! A rule set is loaded once, validated, and then only read. The bundled
//! definition lives in `rules/catalog.toml` and is embedded at build time.

pub mod field_path;
pub mod price;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::assets::RuleAssets;
use crate::config::defaults::BUNDLED_RULES_FILE;
use crate::errors::{RuleError, RuleResult};
use crate::models::GenericEntry;

pub use field_path::FieldPath;
pub use price::PriceRule;

/// Field rule names the mapper understands
pub const TITLE_FIELD: &str = "title";
pub const PRICE_FIELD: &str = "price";
pub const IMAGE_URL_FIELD: &str = "image_url";

const KNOWN_FIELDS: &[&str] = &[TITLE_FIELD, PRICE_FIELD, IMAGE_URL_FIELD];
const MANDATORY_RULES: &[&str] = &[TITLE_FIELD, PRICE_FIELD];

/// How to read one movie field out of a generic entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    /// Candidate paths, tried in order; the first one that resolves wins
    pub paths: Vec<FieldPath>,
    #[serde(default)]
    pub required: bool,
}

/// A complete, declarative description of a feed layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    /// Candidate locations of the entry list, tried in order
    pub entry_paths: Vec<FieldPath>,
    #[serde(default)]
    pub price: PriceRule,
    pub fields: Vec<FieldRule>,
}

impl RuleSet {
    /// Check the rule set is usable by the pipeline
    pub fn validate(&self) -> RuleResult<()> {
        if self.name.trim().is_empty() {
            return Err(RuleError::invalid("<unnamed>", "rule set name is empty"));
        }
        if self.entry_paths.is_empty() {
            return Err(RuleError::invalid(&self.name, "no entry paths defined"));
        }

        for rule in &self.fields {
            if !KNOWN_FIELDS.contains(&rule.name.as_str()) {
                return Err(RuleError::invalid(
                    &self.name,
                    format!(
                        "unknown field '{}' (expected one of: {})",
                        rule.name,
                        KNOWN_FIELDS.join(", ")
                    ),
                ));
            }
            if rule.paths.is_empty() {
                return Err(RuleError::invalid(
                    &self.name,
                    format!("field '{}' has no paths", rule.name),
                ));
            }
            if self.fields.iter().filter(|r| r.name == rule.name).count() > 1 {
                return Err(RuleError::invalid(
                    &self.name,
                    format!("field '{}' is defined more than once", rule.name),
                ));
            }
        }

        for name in MANDATORY_RULES {
            match self.field(name) {
                Some(rule) if rule.required => {}
                Some(_) => {
                    return Err(RuleError::invalid(
                        &self.name,
                        format!("field '{name}' must be required"),
                    ));
                }
                None => {
                    return Err(RuleError::invalid(
                        &self.name,
                        format!("missing rule for field '{name}'"),
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }
}

/// Validated, read-only rule set with the operations the pipeline needs
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Load the rule set embedded in the binary
    pub fn load_bundled() -> RuleResult<Self> {
        let file = RuleAssets::get_rules(BUNDLED_RULES_FILE).ok_or_else(|| {
            RuleError::AssetNotFound {
                path: BUNDLED_RULES_FILE.to_string(),
            }
        })?;
        let contents =
            std::str::from_utf8(&file.data).map_err(|_| RuleError::InvalidEncoding {
                path: BUNDLED_RULES_FILE.to_string(),
            })?;

        let engine = Self::from_toml_str(contents)?;
        info!(
            "Loaded bundled rule set '{}' ({} entry paths, {} field rules)",
            engine.rules.name,
            engine.rules.entry_paths.len(),
            engine.rules.fields.len()
        );
        Ok(engine)
    }

    /// Load a rule set from a TOML file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> RuleResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let engine = Self::from_toml_str(&contents)?;
        info!(
            "Loaded rule set '{}' from {}",
            engine.rules.name,
            path.display()
        );
        Ok(engine)
    }

    pub fn from_toml_str(contents: &str) -> RuleResult<Self> {
        let rules: RuleSet = toml::from_str(contents)?;
        Self::from_rule_set(rules)
    }

    pub fn from_rule_set(rules: RuleSet) -> RuleResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    pub fn entry_paths(&self) -> &[FieldPath] {
        &self.rules.entry_paths
    }

    /// Find the entry list inside a decoded payload
    pub fn locate_entries<'a>(&self, root: &'a Value) -> Option<(&FieldPath, &'a Vec<Value>)> {
        self.rules.entry_paths.iter().find_map(|path| match path.resolve(root) {
            Some(Value::Array(items)) => Some((path, items)),
            Some(_) => {
                debug!("Entry path '{}' resolved to a non-list value", path);
                None
            }
            None => None,
        })
    }

    /// Resolve a field through its rule's candidate paths
    ///
    /// Only usable values count as a match: non-empty strings and numbers.
    pub fn field_value<'a>(&self, entry: &'a GenericEntry, field: &str) -> Option<&'a Value> {
        let rule = self.rules.field(field)?;
        rule.paths
            .iter()
            .filter_map(|path| path.resolve_in(entry.fields()))
            .find(|value| is_usable(value))
    }

    /// Resolve a field as trimmed text
    pub fn field_text(&self, entry: &GenericEntry, field: &str) -> Option<String> {
        match self.field_value(entry, field)? {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numeric price of an entry; entries without a price count as free
    pub fn extract_price(&self, entry: &GenericEntry) -> f64 {
        self.rules
            .price
            .extract(self.field_value(entry, PRICE_FIELD))
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.rules.field(field).is_some_and(|rule| rule.required)
    }
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(_) => true,
        _ => false,
    }
}
