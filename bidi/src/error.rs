//! Error types.
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal consistency failures.
///
/// None of these are caused by bad document content; they indicate that
/// the tree or the resolver handed us something that violates the
/// invariants of the collection pass, and processing of the current
/// document should stop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pop-directional-format was requested with no override open.
    #[error("pop directional format for {node} without a matching override")]
    UnbalancedOverride { node: String },

    /// The innermost open override does not belong to the node closing it.
    #[error("override opened by {expected} was closed by {found}")]
    MismatchedOverride { expected: String, found: String },

    /// Traversal finished with overrides still open.
    #[error("{count} explicit override(s) still open after traversal")]
    UnclosedOverrides { count: usize },

    /// The level resolver did not return one level per character.
    #[error("resolver returned {got} levels for {expected} characters")]
    LevelCountMismatch { expected: usize, got: usize },
}
