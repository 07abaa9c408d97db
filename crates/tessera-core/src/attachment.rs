//! Uploaded media asset descriptors
//!
//! An [`Attachment`] references an asset that an upload collaborator has
//! already stored. Tessera never constructs the URLs itself; it only
//! carries them between the upload seam and the sections/banners that
//! display the asset.

use serde::{Deserialize, Serialize};

/// A previously uploaded media asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
	/// Identifier assigned by the upload collaborator.
	pub id: i64,
	/// URL of the reduced-size preview rendition.
	pub thumbnail_url: String,
	/// URL of the original upload.
	pub original_url: String,
}

impl Attachment {
	/// Create an attachment descriptor from collaborator-provided parts.
	pub fn new(id: i64, thumbnail_url: impl Into<String>, original_url: impl Into<String>) -> Self {
		Self {
			id,
			thumbnail_url: thumbnail_url.into(),
			original_url: original_url.into(),
		}
	}
}
