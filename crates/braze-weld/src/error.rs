//! Error types for binding generation
//!
//! Every failure is terminal for the run: either both emitted artifacts
//! are written, or neither is.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for braze-weld operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Main error type for braze-weld
#[derive(Debug, Error)]
pub enum WeldError {
    /// Requested class absent from the parsed header tree
    #[error("Class not found in header: {class}")]
    ClassNotFound {
        class: String,
    },

    /// A member's shape cannot be classified
    #[error("Malformed signature in {class}: {detail}")]
    MalformedSignature {
        class: String,
        detail: String,
    },

    /// Expected compiled shared library missing at the derived path
    #[error("Compiled library not found: {0}")]
    MissingArtifact(PathBuf),

    /// Overload set the emission target cannot disambiguate
    #[error("Binding plan conflict: {0}")]
    PlanConflict(String),

    /// The external header parser failed or produced an undecodable tree
    #[error("Header parse error: {0}")]
    HeaderParse(String),

    /// Invalid fully-qualified class identifier
    #[error("Invalid class identifier: {0:?}")]
    InvalidIdentifier(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeldError {
    /// Create a class-not-found error
    pub fn class_not_found(class: impl Into<String>) -> Self {
        WeldError::ClassNotFound {
            class: class.into(),
        }
    }

    /// Create a malformed-signature error
    pub fn malformed(class: impl Into<String>, detail: impl Into<String>) -> Self {
        WeldError::MalformedSignature {
            class: class.into(),
            detail: detail.into(),
        }
    }

    /// Create a header-parse error
    pub fn parse(message: impl Into<String>) -> Self {
        WeldError::HeaderParse(message.into())
    }
}
