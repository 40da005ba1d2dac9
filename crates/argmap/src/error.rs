//! Error taxonomy for declaration validation and typed retrieval.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced to the caller.
///
/// [`Error::DuplicateOption`] is a programming mistake in the embedding
/// program and is raised before any argv token is consumed. The remaining
/// kinds are recoverable extraction failures; whether to print usage and
/// exit or to propagate is the caller's choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two declarations share a short or a long name.
    #[error("duplicate option declaration '{name}'")]
    DuplicateOption { name: String },

    /// Extraction from an option the command line never carried.
    #[error("option '--{name}' was not provided")]
    NotProvided { name: String },

    /// Extraction from an option that appeared without a value.
    #[error("option '--{name}' does not carry a value")]
    NoValue { name: String },

    /// Indexed extraction past the captured values.
    #[error("option '--{name}' has {len} value(s), no index {index}")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    /// A raw value failed conversion to the requested type.
    #[error("invalid value '{value}' for option '--{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}
