//! Price extraction
//!
//! Feed prices are formatted strings (`"$9.99"`, `"£1,299.00"`, `"Free"`) or,
//! for some feeds, plain numbers. Extraction always yields a finite number:
//!
//! 1. JSON numbers are used as-is.
//! 2. Strings matching a free label (case-insensitive) are `0`.
//! 3. Other strings keep only ASCII digits and `.`; the remainder is parsed
//!    and falls back to `0` when empty or unparsable. Digit runs too large
//!    for `f64` saturate at `f64::MAX`.
//! 4. Missing or non-scalar values are `0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::defaults::DEFAULT_FREE_LABELS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    /// Labels the feed uses for titles without a price
    #[serde(default = "default_free_labels")]
    pub free_labels: Vec<String>,
}

fn default_free_labels() -> Vec<String> {
    DEFAULT_FREE_LABELS.iter().map(|s| s.to_string()).collect()
}

impl Default for PriceRule {
    fn default() -> Self {
        Self {
            free_labels: default_free_labels(),
        }
    }
}

impl PriceRule {
    /// Extract a numeric price from an optional feed value
    pub fn extract(&self, value: Option<&Value>) -> f64 {
        match value {
            Some(Value::Number(n)) => n.as_f64().filter(|p| p.is_finite()).unwrap_or(0.0),
            Some(Value::String(text)) => self.parse_text(text),
            _ => 0.0,
        }
    }

    /// Parse a formatted price string
    pub fn parse_text(&self, text: &str) -> f64 {
        let trimmed = text.trim();
        if self.is_free_label(trimmed) {
            return 0.0;
        }

        let numeric: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        match numeric.parse::<f64>() {
            Ok(price) if price.is_infinite() => f64::MAX,
            Ok(price) => price,
            Err(_) => 0.0,
        }
    }

    fn is_free_label(&self, text: &str) -> bool {
        self.free_labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(text))
    }
}
