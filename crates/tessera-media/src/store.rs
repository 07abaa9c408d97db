//! Upload collaborator seam
//!
//! The library never turns raw bytes into URLs itself. An [`AssetStore`]
//! implementation (HTTP client, test fake) is injected wherever an
//! upload can happen and returns the [`Attachment`] descriptor the tree
//! then carries.
//!
//! [`Attachment`]: tessera_core::Attachment

use async_trait::async_trait;
use tessera_core::{Attachment, CollaboratorResult};

/// Classification an upload is submitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
	/// Raster or vector imagery (thumbnails get generated).
	Image,
	/// Moving imagery.
	Video,
	/// Everything else (PDFs, spreadsheets, ...).
	Document,
}

/// External storage for uploaded asset bytes.
///
/// Failures are reported as [`CollaboratorError`] and are the only
/// errors an operator sees; the in-memory tree is untouched until the
/// returned attachment is filed into it.
///
/// [`CollaboratorError`]: tessera_core::CollaboratorError
#[async_trait]
pub trait AssetStore: Send + Sync {
	/// Store raw bytes and return the descriptor for the stored asset.
	async fn upload(&self, bytes: Vec<u8>, filename: &str, kind: AssetKind) -> CollaboratorResult<Attachment>;
}
