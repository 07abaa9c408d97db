//! # Tessera Core
//!
//! Value types and algorithms shared by every Tessera subsystem:
//!
//! - [`LocalizedText`] - the two-locale string pair used by every
//!   user-facing field
//! - [`Attachment`] - a previously uploaded media asset, opaque beyond
//!   its URLs
//! - [`ordering`] - the reorder engine that keeps rank values contiguous
//!   under insert, delete, and drag-and-drop moves
//! - [`CollaboratorError`] - the one error class external persistence
//!   collaborators report back to the operator
//!
//! Everything here is a plain value: operations produce new values and
//! never touch hidden state.

pub mod attachment;
pub mod error;
pub mod localized;
pub mod ordering;

pub use attachment::Attachment;
pub use error::{CollaboratorError, CollaboratorResult};
pub use localized::{Locale, LocalizedText};
pub use ordering::{Ranked, next_rank, renumber, reorder};

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use crate::attachment::Attachment;
	pub use crate::error::{CollaboratorError, CollaboratorResult};
	pub use crate::localized::{Locale, LocalizedText};
	pub use crate::ordering::{Ranked, next_rank, renumber, reorder};
}
