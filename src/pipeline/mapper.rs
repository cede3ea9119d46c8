//! Mapper stage: generic entries to typed movies

use serde::Serialize;
use tracing::debug;

use crate::errors::MappingSkipped;
use crate::models::{GenericEntry, Movie};
use crate::rules::{IMAGE_URL_FIELD, PRICE_FIELD, RuleEngine, TITLE_FIELD};

/// Mapped movies plus the entries that could not be mapped
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MappingReport {
    pub movies: Vec<Movie>,
    pub skipped: Vec<MappingSkipped>,
}

/// Map each entry to a [`Movie`], dropping entries missing a required field
pub fn to_movies(entries: &[GenericEntry], rules: &RuleEngine) -> MappingReport {
    let mut report = MappingReport {
        movies: Vec::with_capacity(entries.len()),
        skipped: Vec::new(),
    };

    for (index, entry) in entries.iter().enumerate() {
        match map_entry(index, entry, rules) {
            Ok(movie) => report.movies.push(movie),
            Err(skip) => {
                debug!("{}", skip);
                report.skipped.push(skip);
            }
        }
    }

    report
}

fn map_entry(
    index: usize,
    entry: &GenericEntry,
    rules: &RuleEngine,
) -> Result<Movie, MappingSkipped> {
    let missing = |field: &str| MappingSkipped {
        index,
        field: field.to_string(),
    };

    let title = rules
        .field_text(entry, TITLE_FIELD)
        .ok_or_else(|| missing(TITLE_FIELD))?;

    if rules.field_value(entry, PRICE_FIELD).is_none() {
        return Err(missing(PRICE_FIELD));
    }
    let price = rules.extract_price(entry);

    let image_url = rules.field_text(entry, IMAGE_URL_FIELD);
    if image_url.is_none() && rules.is_required(IMAGE_URL_FIELD) {
        return Err(missing(IMAGE_URL_FIELD));
    }

    Ok(Movie {
        title,
        price,
        image_url,
    })
}
