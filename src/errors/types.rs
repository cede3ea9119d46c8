//! Error type definitions for the showtime catalog pipeline
//!
//! This module defines all error types used throughout the crate, providing a
//! hierarchical error system where the pipeline boundary decides which errors
//! are swallowed and which are reported.

use serde::Serialize;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Feed source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Pipeline errors surfaced through the diagnostic entry point
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors raised while turning raw feed text into generic entries
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload was empty or whitespace only
    #[error("Feed payload is empty")]
    EmptyPayload,

    /// The payload is not valid JSON
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// None of the configured entry paths resolved to a list
    #[error("No entry list found in payload (tried: {tried})")]
    MissingEntries { tried: String },
}

/// Errors raised while loading or validating rule definitions
#[derive(Error, Debug)]
pub enum RuleError {
    /// The bundled rule file is missing from the embedded assets
    #[error("Rule asset not found: {path}")]
    AssetNotFound { path: String },

    /// Reading a rule file from disk failed
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The rule file is not valid UTF-8
    #[error("Rule file {path} is not valid UTF-8")]
    InvalidEncoding { path: String },

    /// The rule definition is not valid TOML for a rule set
    #[error("Invalid rule definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rule definition parsed but is semantically invalid
    #[error("Invalid rule set '{rule_set}': {message}")]
    Invalid { rule_set: String, message: String },
}

/// Feed source specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// The feed URL could not be parsed
    #[error("Invalid feed URL: {url} - {message}")]
    InvalidUrl { url: String, message: String },

    /// Transport level failures (connect, TLS, timeouts)
    #[error("Request failed: {url} - {message}")]
    Transport { url: String, message: String },

    /// HTTP errors from the feed host
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// The body could not be read or decompressed
    #[error("Failed to read feed body: {message}")]
    Body { message: String },

    /// The body is not valid UTF-8 text
    #[error("Feed body is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Local payload files
    #[error("Failed to read feed file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported at the pipeline boundary by `try_parse`
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The rule engine failed to initialize; every parse degrades to empty
    #[error("Rule engine unavailable: {reason}")]
    RuleEngineUnavailable { reason: String },

    /// The payload could not be decoded
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// A single entry dropped by the mapper because a required field is missing
///
/// Skips never abort a batch; they are collected next to the mapped movies.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Entry {index} skipped: missing required field '{field}'")]
pub struct MappingSkipped {
    /// Position of the entry in the filtered list
    pub index: usize,
    /// Name of the field rule that did not resolve
    pub field: String,
}

impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl RuleError {
    /// Create a validation error for the named rule set
    pub fn invalid<R: Into<String>, M: Into<String>>(rule_set: R, message: M) -> Self {
        Self::Invalid {
            rule_set: rule_set.into(),
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a body read error
    pub fn body<S: Into<String>>(message: S) -> Self {
        Self::Body {
            message: message.into(),
        }
    }
}

impl From<&RuleError> for PipelineError {
    fn from(err: &RuleError) -> Self {
        Self::RuleEngineUnavailable {
            reason: err.to_string(),
        }
    }
}
