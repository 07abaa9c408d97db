//! The immutable folder/file tree
//!
//! [`MediaLibrary`] is a persistent value: structural operations rebuild
//! only the spine from the root list down to the mutation point and
//! reuse every other branch by `Arc` reference. Folder ids are uuids,
//! unique across the whole tree, which is what makes a path of ids an
//! unambiguous address.

use crate::error::{MediaError, MediaResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tessera_core::Attachment;
use uuid::Uuid;

/// An uploaded file filed into a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
	/// Tree-local identifier.
	pub id: String,
	/// Operator-chosen display name.
	pub name: String,
	/// The stored asset this entry points at.
	pub attachment: Attachment,
}

impl MediaFile {
	/// Create a file entry with a fresh id.
	pub fn new(name: impl Into<String>, attachment: Attachment) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			name: name.into(),
			attachment,
		}
	}
}

/// One folder of the media tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFolder {
	/// Identifier, unique across the whole tree.
	pub id: String,
	/// Operator-chosen display name.
	pub name: String,
	/// Child folders; shared by reference with other tree versions.
	#[serde(default)]
	pub sub_folders: Vec<Arc<MediaFolder>>,
	/// Files filed directly in this folder.
	#[serde(default)]
	pub files: Vec<MediaFile>,
}

impl MediaFolder {
	/// Create an empty folder with a fresh id.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			name: name.into(),
			sub_folders: Vec::new(),
			files: Vec::new(),
		}
	}
}

/// One breadcrumb segment derived from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
	/// The folder's id (usable as a navigation target).
	pub id: String,
	/// The folder's display name.
	pub name: String,
}

/// The whole media tree: a list of root folders.
///
/// All operations are value-producing; the receiver is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaLibrary {
	#[serde(default)]
	roots: Vec<Arc<MediaFolder>>,
}

impl MediaLibrary {
	/// Create an empty library.
	pub fn new() -> Self {
		Self::default()
	}

	/// The top-level folders.
	pub fn roots(&self) -> &[Arc<MediaFolder>] {
		&self.roots
	}

	/// Walk a path of folder ids down from the root list.
	///
	/// Any segment failing to match returns `None` - a stale path after
	/// a concurrent delete is a normal outcome, not an error.
	///
	/// Resolution is a pure function of the path and this tree value:
	/// the same inputs always return the same folder.
	pub fn resolve(&self, path: &[String]) -> Option<&MediaFolder> {
		let (head, rest) = path.split_first()?;
		let mut current = self.roots.iter().find(|f| f.id == *head)?;
		for segment in rest {
			current = current.sub_folders.iter().find(|f| f.id == *segment)?;
		}
		Some(current)
	}

	/// Create a folder under `parent_path` (or at the root for an empty
	/// path) and return the new library plus the new folder's id.
	///
	/// # Errors
	///
	/// [`MediaError::PathNotFound`] when the parent path is stale; the
	/// old library stays valid.
	pub fn create_folder(
		&self,
		parent_path: &[String],
		name: impl Into<String>,
	) -> MediaResult<(Self, String)> {
		let folder = MediaFolder::new(name);
		let folder_id = folder.id.clone();

		if parent_path.is_empty() {
			let mut roots = self.roots.clone();
			roots.push(Arc::new(folder));
			return Ok((Self { roots }, folder_id));
		}

		let roots = rebuild_at(&self.roots, parent_path, |parent| {
			let mut updated = parent.clone();
			updated.sub_folders.push(Arc::new(folder));
			updated
		})
		.ok_or_else(|| MediaError::PathNotFound(parent_path.to_vec()))?;
		Ok((Self { roots }, folder_id))
	}

	/// Delete the folder at `path`, taking everything beneath it along.
	///
	/// A single-segment path removes from the root list; deeper paths
	/// rebuild the spine to the parent and drop the child there.
	pub fn delete_folder(&self, path: &[String]) -> MediaResult<Self> {
		let Some((target, parent_path)) = path.split_last() else {
			return Err(MediaError::EmptyPath);
		};

		if parent_path.is_empty() {
			if !self.roots.iter().any(|f| f.id == *target) {
				return Err(MediaError::PathNotFound(path.to_vec()));
			}
			let roots = self
				.roots
				.iter()
				.filter(|f| f.id != *target)
				.cloned()
				.collect();
			return Ok(Self { roots });
		}

		if self.resolve(path).is_none() {
			return Err(MediaError::PathNotFound(path.to_vec()));
		}
		let roots = rebuild_at(&self.roots, parent_path, |parent| {
			let mut updated = parent.clone();
			updated.sub_folders.retain(|f| f.id != *target);
			updated
		})
		.ok_or_else(|| MediaError::PathNotFound(path.to_vec()))?;
		Ok(Self { roots })
	}

	/// File an uploaded attachment into the folder at `path`.
	///
	/// # Errors
	///
	/// [`MediaError::RootUpload`] for an empty path - files live inside
	/// folders only - and [`MediaError::PathNotFound`] for a stale path.
	pub fn upload_file(
		&self,
		path: &[String],
		name: impl Into<String>,
		attachment: Attachment,
	) -> MediaResult<Self> {
		if path.is_empty() {
			return Err(MediaError::RootUpload);
		}
		let file = MediaFile::new(name, attachment);
		let roots = rebuild_at(&self.roots, path, |folder| {
			let mut updated = folder.clone();
			updated.files.push(file);
			updated
		})
		.ok_or_else(|| MediaError::PathNotFound(path.to_vec()))?;
		Ok(Self { roots })
	}

	/// Remove one file by id from the folder at `path`.
	///
	/// A live folder without that file is a stale reference; the library
	/// is returned unchanged with a logged warning.
	pub fn delete_file(&self, path: &[String], file_id: &str) -> MediaResult<Self> {
		if path.is_empty() {
			return Err(MediaError::EmptyPath);
		}
		let folder = self
			.resolve(path)
			.ok_or_else(|| MediaError::PathNotFound(path.to_vec()))?;
		if !folder.files.iter().any(|f| f.id == file_id) {
			tracing::warn!(file_id, "delete_file target vanished; leaving library unchanged");
			return Ok(self.clone());
		}
		let roots = rebuild_at(&self.roots, path, |folder| {
			let mut updated = folder.clone();
			updated.files.retain(|f| f.id != file_id);
			updated
		})
		.ok_or_else(|| MediaError::PathNotFound(path.to_vec()))?;
		Ok(Self { roots })
	}

	/// Derive breadcrumb labels for a path by walking it.
	///
	/// Stops at the first stale segment rather than erroring, so a
	/// breadcrumb bar degrades gracefully while navigation state catches
	/// up with a concurrent tree edit.
	pub fn breadcrumbs(&self, path: &[String]) -> Vec<Crumb> {
		let mut crumbs = Vec::new();
		let mut level: &[Arc<MediaFolder>] = &self.roots;
		for segment in path {
			match level.iter().find(|f| f.id == *segment) {
				Some(folder) => {
					crumbs.push(Crumb {
						id: folder.id.clone(),
						name: folder.name.clone(),
					});
					level = &folder.sub_folders;
				}
				None => break,
			}
		}
		crumbs
	}
}

/// Rebuild the spine from `folders` down the given path, applying `edit`
/// to the folder at the path's end.
///
/// Every folder not on the path is carried over as the same `Arc`, which
/// is what keeps untouched branches reference-identical across tree
/// versions.
fn rebuild_at<F>(folders: &[Arc<MediaFolder>], path: &[String], edit: F) -> Option<Vec<Arc<MediaFolder>>>
where
	F: FnOnce(&MediaFolder) -> MediaFolder,
{
	let (head, rest) = path.split_first()?;
	let position = folders.iter().position(|f| f.id == *head)?;
	let target = &folders[position];

	let replacement = if rest.is_empty() {
		edit(target)
	} else {
		let sub_folders = rebuild_at(&target.sub_folders, rest, edit)?;
		MediaFolder {
			id: target.id.clone(),
			name: target.name.clone(),
			sub_folders,
			files: target.files.clone(),
		}
	};

	let mut out = folders.to_vec();
	out[position] = Arc::new(replacement);
	Some(out)
}
