//! # Failure Kinds
//!
//! Only the violating ("before") versions ever produce these. The compliant
//! versions remove them structurally: narrow traits leave nothing to refuse,
//! and polymorphic dispatch leaves no tag to miss.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolidError {
    /// A variant was asked for a contract method it cannot honour.
    #[error("{variant} does not support {operation}")]
    UnsupportedOperation {
        variant: &'static str,
        operation: &'static str,
    },

    /// A call site branching on a tag met one it has no arm for.
    #[error("no handler for '{tag}'")]
    UnrecognizedCase { tag: String },
}

impl SolidError {
    pub fn unsupported(variant: &'static str, operation: &'static str) -> Self {
        Self::UnsupportedOperation { variant, operation }
    }

    pub fn unrecognized(tag: impl Into<String>) -> Self {
        Self::UnrecognizedCase { tag: tag.into() }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
