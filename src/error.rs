//! Error types for the advisor.
//!
//! Errors are strongly typed using thiserror. Inner components return
//! these errors; only the recommendation boundary in [`crate::engine`]
//! turns them into the empty result.

use thiserror::Error;

use crate::category::Category;

/// Validation errors raised while checking inputs, catalogs, or configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Answer '{label}' for question '{question}' is not a yes/no value")]
    InvalidAnswer {
        question: String,
        label: String,
    },

    #[error("Score for '{subject}' is not finite (category {category})")]
    NonFiniteScore {
        subject: String,
        category: Category,
    },

    #[error("Invalid weights: {reason}")]
    InvalidWeights {
        reason: String,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("Invalid knowledge base: {reason}")]
    InvalidKnowledgeBase {
        reason: String,
    },
}

/// Errors raised while running the recommendation pipeline.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("DLT catalog is empty")]
    EmptyCatalog,
}

/// Top-level error type for the advisor.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdvisorError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }
}

/// Result type alias for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
