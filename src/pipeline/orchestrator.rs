use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::{MappingSkipped, PipelineError, PipelineResult, RuleError};
use crate::models::Movie;
use crate::rules::RuleEngine;

use super::{decode, filter_by_limit, to_movies};

/// Outcome of a successful pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub movies: Vec<Movie>,
    /// Entries that passed the price filter but could not be mapped
    pub skipped: Vec<MappingSkipped>,
    /// Entries found in the payload before filtering
    pub decoded: usize,
    /// Entries retained by the price filter
    pub retained: usize,
}

/// Decode → filter → map over a feed payload
///
/// The rule engine is loaded once at construction and shared read-only
/// between clones, which may be used from any thread. If loading failed the
/// pipeline still constructs: `parse` then always returns an empty list and
/// `try_parse` reports [`PipelineError::RuleEngineUnavailable`].
#[derive(Debug, Clone)]
pub struct CatalogPipeline {
    rules: Result<Arc<RuleEngine>, Arc<RuleError>>,
}

impl CatalogPipeline {
    /// Build a pipeline from the rule set bundled into the binary
    pub fn bundled() -> Self {
        Self::from_rules(RuleEngine::load_bundled())
    }

    /// Build a pipeline from a rule file on disk
    pub fn from_rule_file<P: AsRef<Path>>(path: P) -> Self {
        Self::from_rules(RuleEngine::from_file(path))
    }

    /// Build a pipeline from the result of loading a rule set
    pub fn from_rules(rules: Result<RuleEngine, RuleError>) -> Self {
        let rules = match rules {
            Ok(engine) => Ok(Arc::new(engine)),
            Err(e) => {
                warn!(
                    "Rule engine failed to initialize, catalog parsing disabled: {}",
                    e
                );
                Err(Arc::new(e))
            }
        };
        Self { rules }
    }

    pub fn new(engine: RuleEngine) -> Self {
        Self {
            rules: Ok(Arc::new(engine)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.rules.is_ok()
    }

    pub fn rules(&self) -> PipelineResult<&RuleEngine> {
        self.rules
            .as_deref()
            .map_err(|e| PipelineError::from(&**e))
    }

    /// Parse a feed payload into movies priced at or below `limit`
    ///
    /// Never fails: any error is logged and yields an empty list. Entries
    /// missing required fields are dropped individually. Use
    /// [`Self::try_parse`] when the reason for an empty result matters.
    pub fn parse(&self, response: &str, limit: f64) -> Vec<Movie> {
        match self.try_parse(response, limit) {
            Ok(report) => report.movies,
            Err(e) => {
                warn!("Catalog parse failed, returning no movies: {}", e);
                Vec::new()
            }
        }
    }

    /// Parse a feed payload, reporting failures and per-entry skips
    pub fn try_parse(&self, response: &str, limit: f64) -> PipelineResult<ParseReport> {
        let rules = self.rules()?;

        let entries = decode(response, rules)?;
        let decoded = entries.len();

        let filtered = filter_by_limit(entries, limit, rules);
        let retained = filtered.len();

        let mapping = to_movies(&filtered, rules);
        if !mapping.skipped.is_empty() {
            warn!(
                "Skipped {} of {} entries missing required fields",
                mapping.skipped.len(),
                retained
            );
        }

        info!(
            "Parsed {} movies from {} entries (limit {})",
            mapping.movies.len(),
            decoded,
            limit
        );

        Ok(ParseReport {
            movies: mapping.movies,
            skipped: mapping.skipped,
            decoded,
            retained,
        })
    }
}

impl Default for CatalogPipeline {
    fn default() -> Self {
        Self::bundled()
    }
}
