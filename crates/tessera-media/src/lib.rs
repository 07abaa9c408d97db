//! # Tessera Media
//!
//! The media organization subsystem: an immutable, path-addressed tree
//! of folders and uploaded files.
//!
//! A [`MediaLibrary`] is a persistent value - every structural operation
//! returns a new library and reuses all branches the operation did not
//! touch, by reference. Render-diffing layers rely on that reference
//! identity to decide what to re-draw, so the sharing is a correctness
//! property here, not an optimization.
//!
//! Paths are sequences of folder ids from the root list down to a
//! target. Resolving a stale path (the tree changed underneath it) is a
//! normal outcome: lookups return `None`, mutations report
//! [`MediaError::PathNotFound`] and leave the old value untouched.
//!
//! Uploading bytes is the job of an injected [`AssetStore`]
//! collaborator; the library only records the returned [`Attachment`]
//! descriptors.
//!
//! [`Attachment`]: tessera_core::Attachment

pub mod error;
pub mod store;
pub mod tree;

pub use error::{MediaError, MediaResult};
pub use store::{AssetKind, AssetStore};
pub use tree::{Crumb, MediaFile, MediaFolder, MediaLibrary};

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use crate::error::{MediaError, MediaResult};
	pub use crate::store::{AssetKind, AssetStore};
	pub use crate::tree::{Crumb, MediaFile, MediaFolder, MediaLibrary};
}
