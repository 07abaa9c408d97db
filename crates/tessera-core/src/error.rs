//! Collaborator error taxonomy
//!
//! Persistence and upload collaborators are external: the only errors
//! they surface to an operator are request failures. Structural problems
//! (stale paths, missing update targets) never become errors at all;
//! they degrade to no-ops at the mutation boundary.

use thiserror::Error;

/// A failed request against an external persistence or upload
/// collaborator.
///
/// The draft being saved is always retained when one of these is
/// reported; `retryable` tells the operator-facing layer whether
/// re-submitting the same draft is worthwhile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CollaboratorError {
	/// Operator-facing description of the failure.
	pub message: String,
	/// Whether re-submitting the unchanged draft may succeed.
	pub retryable: bool,
}

impl CollaboratorError {
	/// A transient failure; the operator should retry.
	pub fn retryable(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			retryable: true,
		}
	}

	/// A failure retrying will not fix (e.g. the record was rejected).
	pub fn fatal(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			retryable: false,
		}
	}
}

/// Result type for collaborator requests.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
