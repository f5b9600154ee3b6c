//! Error types for liteqb

use thiserror::Error;

/// Result type alias for builder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for query construction
#[derive(Debug, Error)]
pub enum QbError {
    /// Table or column name rejected by the identifier grammar
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// Column name collides with a reserved SQL keyword
    #[error("Reserved keyword: {0}")]
    ReservedKeyword(String),

    /// Builder state does not permit the operation
    #[error("Invalid state: {0}")]
    State(String),

    /// Value or token incompatible with what the operation expects
    #[error("Type error: {0}")]
    Type(String),

    /// Primary-key, foreign-key, or column bookkeeping violation
    #[error("Constraint error: {0}")]
    Constraint(String),

    /// Statement-specific rendering failed during build
    #[error("Query building failed: {source}")]
    Build {
        #[source]
        source: Box<QbError>,
    },

    /// Failure surfaced by the executing database collaborator
    #[error("Database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QbError {
    /// Create an identifier error
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Create a type error
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }

    /// Create a constraint error
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Wrap a rendering failure at the build boundary, keeping the cause
    pub(crate) fn build(source: QbError) -> Self {
        Self::Build {
            source: Box::new(source),
        }
    }

    /// Check if this is an identifier or reserved-keyword error
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::ReservedKeyword(_))
    }

    /// Check if this is a state error
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Check if this is a constraint error
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}
