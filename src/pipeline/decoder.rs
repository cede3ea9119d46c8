//! Decoder stage: raw feed text to generic entries

use serde_json::Value;
use tracing::debug;

use crate::errors::DecodeError;
use crate::models::GenericEntry;
use crate::rules::RuleEngine;

/// Decode a feed payload and unwrap its entry list
///
/// The list is located through the rule set's entry paths. List items that
/// are not objects carry no fields and are left out.
pub fn decode(raw: &str, rules: &RuleEngine) -> Result<Vec<GenericEntry>, DecodeError> {
    if raw.trim().is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let root: Value = serde_json::from_str(raw)?;

    let (path, items) = rules
        .locate_entries(&root)
        .ok_or_else(|| DecodeError::MissingEntries {
            tried: rules
                .entry_paths()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let entries: Vec<GenericEntry> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(fields) => Some(GenericEntry::new(fields.clone())),
            other => {
                debug!("Skipping non-object item {} in entry list: {}", index, other);
                None
            }
        })
        .collect();

    debug!(
        "Decoded {} entries from '{}' ({} items in list)",
        entries.len(),
        path,
        items.len()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> RuleEngine {
        RuleEngine::load_bundled().unwrap()
    }

    #[test]
    fn test_decode_results_shape() {
        let raw = r#"{"results": [{"title": "A", "price": "$1.99"}, {"title": "B", "price": "Free"}]}"#;
        let entries = decode(raw, &engine()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get("title"), Some(&json!("A")));
        assert_eq!(entries[1].get("title"), Some(&json!("B")));
    }

    #[test]
    fn test_decode_itunes_rss_shape() {
        let raw = json!({
            "feed": {
                "author": {"name": {"label": "iTunes Store"}},
                "entry": [
                    {"im:name": {"label": "Arrival"}, "im:price": {"label": "$14.99"}}
                ]
            }
        })
        .to_string();

        let entries = decode(&raw, &engine()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_decode_skips_non_objects() {
        let raw = r#"{"results": [1, "two", null, {"title": "A"}]}"#;
        let entries = decode(raw, &engine()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_decode_empty_payload() {
        assert!(matches!(decode("", &engine()), Err(DecodeError::EmptyPayload)));
        assert!(matches!(decode(" \n\t", &engine()), Err(DecodeError::EmptyPayload)));
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(matches!(
            decode("{\"results\": [", &engine()),
            Err(DecodeError::InvalidJson(_))
        ));
        assert!(matches!(
            decode("<html>503</html>", &engine()),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_decode_missing_entry_list() {
        let err = decode(r#"{"items": []}"#, &engine()).unwrap_err();
        match err {
            DecodeError::MissingEntries { tried } => {
                assert_eq!(tried, "results, feed.results, feed.entry");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(decode("[]", &engine()).is_err());
        assert!(decode(r#"{"results": "none"}"#, &engine()).is_err());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let raw = r#"{"results": [{"title": "A"}, {"title": "B"}]}"#;
        assert_eq!(decode(raw, &engine()).unwrap(), decode(raw, &engine()).unwrap());
    }
}
