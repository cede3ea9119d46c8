//! Domain models for the catalog pipeline
//!
//! [`GenericEntry`] is one untyped catalog item as found in the feed, and
//! [`Movie`] is the typed record the pipeline hands to its caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog item before typing
///
/// A thin wrapper around the JSON object found in the feed's entry list. It
/// carries no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericEntry(Map<String, Value>);

impl GenericEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Borrow the entry as a JSON object value for path resolution
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for GenericEntry {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A movie listed in the catalog feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Numeric price in the feed's currency; `0.0` for free titles
    pub price: f64,
    /// Artwork URL, when the feed provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Movie {
    pub fn new<S: Into<String>>(title: S, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            image_url: None,
        }
    }

    pub fn with_image_url<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}
