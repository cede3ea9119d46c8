//! Filter stage: keep entries priced at or below a limit

use tracing::{debug, trace};

use crate::models::GenericEntry;
use crate::rules::RuleEngine;

/// Retain entries whose extracted price is `<= limit`, in input order
///
/// Prices come from [`RuleEngine::extract_price`], so unparsable and free
/// prices count as `0`. A limit with the sign bit set (including `-0.0`)
/// or a NaN limit retains nothing.
pub fn filter_by_limit(
    entries: Vec<GenericEntry>,
    limit: f64,
    rules: &RuleEngine,
) -> Vec<GenericEntry> {
    let total = entries.len();
    if limit.is_nan() || limit.is_sign_negative() {
        debug!(
            "Price filter (limit {}): limit admits no price, dropping {} entries",
            limit, total
        );
        return Vec::new();
    }

    let retained: Vec<GenericEntry> = entries
        .into_iter()
        .filter(|entry| {
            let price = rules.extract_price(entry);
            let keep = price <= limit;
            trace!("Entry price {} vs limit {}: keep={}", price, limit, keep);
            keep
        })
        .collect();

    debug!(
        "Price filter (limit {}): retained {} of {} entries",
        limit,
        retained.len(),
        total
    );
    retained
}
