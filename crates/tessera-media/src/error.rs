//! Media tree errors

use thiserror::Error;

/// Errors raised by structural operations on the media tree.
///
/// All of them mean "the tree changed underneath a stale reference" or
/// "the operation does not exist at this location"; callers keep the old
/// tree value and log, they never crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
	/// A path segment failed to match a live folder id.
	#[error("Folder path not found: {}", .0.join("/"))]
	PathNotFound(Vec<String>),

	/// Files live inside folders; the root list only holds folders.
	#[error("Files cannot be placed at the library root")]
	RootUpload,

	/// The operation needs a non-empty path.
	#[error("An empty path does not address a folder")]
	EmptyPath,
}

/// Result type for media tree operations.
pub type MediaResult<T> = Result<T, MediaError>;
