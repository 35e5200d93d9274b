//! Error types for the life coach agent

use thiserror::Error;

/// Result type alias for coaching operations
pub type Result<T> = std::result::Result<T, CoachError>;

#[derive(Error, Debug)]
pub enum CoachError {

    // =============================
    // Input Contract Violations
    // =============================

    #[error("Opportunity ranking requires at least one candidate")]
    EmptyOpportunities,

    #[error("Template '{template}' requires a non-empty '{field}'")]
    MissingField {
        template: &'static str,
        field: &'static str,
    },

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
