//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. Pure set-algebra code
/// (catalog lookups aside) is total and never produces one of these; only
/// registry lookups, orchestration, and persistence do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A feature or profile lookup missed the registry. Callers treat this as
    /// a logic error, not a user-facing condition.
    #[error("not found: {0}")]
    NotFound(String),

    /// A domain invariant was violated (e.g. duplicate catalog entry, an
    /// assignment naming both a user and a group).
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// An external read in the resolution fan-out failed. Resolution aborts
    /// rather than completing with partial party data.
    #[error("upstream fetch failed in '{branch}': {message}")]
    UpstreamFetch { branch: String, message: String },

    /// Persisting an assignment or role-set change conflicted. Surfaced to
    /// the caller unmodified; retrying requires user intervention.
    #[error("write conflict: {0}")]
    WriteConflict(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    pub fn upstream(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamFetch {
            branch: branch.into(),
            message: message.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::WriteConflict(msg.into())
    }
}
