//! Page editing errors
//!
//! Only two things are errors at this layer: trying to start a save
//! while one is in flight, and the collaborator rejecting a save.
//! Structural problems (stale drafts, unknown orders) degrade to no-ops
//! with a logged warning and never surface here.

use tessera_core::CollaboratorError;
use thiserror::Error;

/// Errors surfaced by the page editing layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PagesError {
	/// A save request is already awaiting its collaborator.
	#[error("A save is already in flight")]
	SaveInFlight,

	/// The persistence collaborator failed; the draft is retained and
	/// the save can be retried as-is.
	#[error("Save failed: {0}")]
	Save(#[from] CollaboratorError),

	/// Section-level saves need the page's persisted id first.
	#[error("Page has no persisted id yet; save the whole page first")]
	UnsavedPage,
}

/// Result type for page editing operations.
pub type PagesResult<T> = Result<T, PagesError>;
