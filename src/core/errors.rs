//! Shared error types for the engine

use thiserror::Error;

use crate::extract::IntegrityIssue;

/// Main error type for carbonmap operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Records referencing ids absent from the reference tables. Reports
    /// normally recover from this locally (skip and report); the variant is
    /// raised only when a caller demands a strict, non-degraded result.
    #[error("referential integrity violated by {} record(s)", issues.len())]
    ReferentialIntegrity { issues: Vec<IntegrityIssue> },

    /// The external order/item/supplier store could not be read. Fatal to
    /// the current query; the caller may retry. No partial result exists.
    #[error("store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A tunable is outside its valid range. Raised at configuration load,
    /// never mid-query.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Snapshot data that fails ingestion-time validation (negative or
    /// non-finite quantities and CO2 factors).
    #[error("ingestion rejected: {0}")]
    Ingestion(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Create a store error with an optional IO source
    pub fn store_unavailable(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, EngineError>;
