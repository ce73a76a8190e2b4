//! Error types for typed tree access.

use thiserror::Error;

/// Errors from the typed accessors ([`get_scalar`] and friends).
///
/// Plain path reads (`get`, `has`) never fail; an unresolvable path is
/// simply absent. These errors exist for callers that want a diagnostic
/// instead of `None`.
///
/// [`get_scalar`]: crate::Node::get_scalar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The path did not resolve to any element.
    #[error("path not found: {path}")]
    NotFound {
        /// The path as given by the caller.
        path: String,
    },

    /// The path resolved to an element of the wrong kind.
    #[error("expected {expected} at {path}, found {found}")]
    KindMismatch {
        /// The path as given by the caller.
        path: String,
        /// The kind the accessor was asked for.
        expected: &'static str,
        /// The kind actually present.
        found: &'static str,
    },
}
