//! Error types for the availcheck library.
//!
//! Malformed cell data is never an `Err` here; it is the product, reported
//! through the entry ledgers. Only programming-contract violations surface
//! as [`AvailError`].

use thiserror::Error;

use crate::spec::SpecVersion;

/// Main error type for availcheck operations.
#[derive(Debug, Error)]
pub enum AvailError {
    /// A specification version was selected that carries no column
    /// definitions. Validating against it would silently accept anything.
    #[error("specification {version} has no column definitions")]
    EmptySpec { version: SpecVersion },

    /// Regex compilation error while building a validation rule.
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for availcheck operations.
pub type Result<T> = std::result::Result<T, AvailError>;
