//! Error types surfaced while finalising a feature tree.

use thiserror::Error;

/// Integration errors raised when the listener is asked for a result it
/// cannot produce.
///
/// These describe a caller that drove the listener incorrectly, not a problem
/// with the document itself. A document without a feature is a valid, empty
/// outcome and is reported as `Ok(None)` instead.
///
/// # Examples
/// ```
/// use cuke_ast::BuildError;
///
/// assert_eq!(BuildError::LanguageNotSet.to_string(), "language has not been set");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// `result()` was requested before any `set_language` event.
    #[error("language has not been set")]
    LanguageNotSet,
}

/// Errors returned by [`parse_source`](crate::replay::parse_source).
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The `gherkin` parser rejected the document.
    #[error("failed to parse feature source: {0}")]
    Parse(#[from] gherkin::ParseError),
    /// The listener could not finalise the tree.
    #[error(transparent)]
    Build(#[from] BuildError),
}
