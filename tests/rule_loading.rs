//! Rule source tests: custom rule files and degraded pipelines

use std::io::Write;

use showtime::errors::PipelineError;
use showtime::{CatalogPipeline, Movie};

const STORE_FEED: &str = r#"{
    "data": {"catalogue": {"items": [
        {"name": "Solaris", "cost": {"display": "€6,50"}, "poster": "http://img/solaris.png"},
        {"name": "Stalker", "cost": {"display": "kostenlos"}},
        {"name": "Mirror", "cost": {"display": "€12,00"}}
    ]}}
}"#;

const STORE_RULES: &str = r#"
name = "store"
entry_paths = ["data.catalogue.items"]

[price]
free_labels = ["kostenlos"]

[[fields]]
name = "title"
paths = ["name"]
required = true

[[fields]]
name = "price"
paths = ["cost.display"]
required = true

[[fields]]
name = "image_url"
paths = ["poster"]
"#;

fn rule_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_rule_file_drives_the_pipeline() {
    let rules = rule_file(STORE_RULES);
    let pipeline = CatalogPipeline::from_rule_file(rules.path());
    assert!(pipeline.is_available());

    // Commas are stripped, so "€6,50" reads as 650
    let movies = pipeline.parse(STORE_FEED, 700.0);
    assert_eq!(
        movies,
        vec![
            Movie::new("Solaris", 650.0).with_image_url("http://img/solaris.png"),
            Movie::new("Stalker", 0.0),
        ]
    );
}

#[test]
fn test_bundled_rules_do_not_match_custom_layout() {
    let pipeline = CatalogPipeline::bundled();
    assert!(pipeline.parse(STORE_FEED, 1000.0).is_empty());
    assert!(matches!(
        pipeline.try_parse(STORE_FEED, 1000.0),
        Err(PipelineError::Decode(_))
    ));
}

#[test]
fn test_invalid_rule_file_degrades_to_empty() {
    let rules = rule_file("name = \"broken\"\nentry_paths = [\"results\"]\n");
    let pipeline = CatalogPipeline::from_rule_file(rules.path());

    assert!(!pipeline.is_available());
    assert!(pipeline
        .parse(r#"{"results": [{"title": "A", "price": "$1"}]}"#, 10.0)
        .is_empty());
    assert!(matches!(
        pipeline.try_parse("{}", 10.0),
        Err(PipelineError::RuleEngineUnavailable { .. })
    ));
}

#[test]
fn test_non_toml_rule_file_degrades_to_empty() {
    let rules = rule_file("function parseJson(json) { return JSON.parse(json); }");
    let pipeline = CatalogPipeline::from_rule_file(rules.path());
    assert!(!pipeline.is_available());
}
