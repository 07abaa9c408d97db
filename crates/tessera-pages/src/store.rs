//! Persistence and catalog collaborator seams
//!
//! The editing layer never talks to a backend directly; it is handed
//! capability objects implementing these traits. Tests inject in-memory
//! fakes, production injects HTTP clients. Failures come back as
//! [`CollaboratorError`] and never cost the operator their draft.
//!
//! [`CollaboratorError`]: tessera_core::CollaboratorError

use crate::pages::Page;
use crate::sections::{Section, SlideType};
use async_trait::async_trait;
use tessera_core::{CollaboratorResult, LocalizedText};

/// Identifiers the collaborator assigned while persisting a page.
///
/// `section_ids` aligns with the page's sections in ascending `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPage {
	/// The page's persisted id.
	pub page_id: i64,
	/// Persisted ids for each section, ascending by order.
	pub section_ids: Vec<i64>,
}

/// Identifier assigned by a single-section save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSection {
	/// The section's persisted id.
	pub section_id: i64,
}

/// External persistence for pages.
#[async_trait]
pub trait PageStore: Send + Sync {
	/// Persist a whole page draft.
	async fn save_page(&self, page: &Page) -> CollaboratorResult<SavedPage>;

	/// Persist one section of an already-persisted page.
	async fn save_section(&self, page_id: i64, section: &Section) -> CollaboratorResult<SavedSection>;
}

/// One pickable entry of an external catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
	/// Opaque id as the catalog knows it.
	pub id: i64,
	/// Operator-facing label.
	pub label: LocalizedText,
}

/// Read access to the external catalogs slider pickers offer.
#[async_trait]
pub trait EntityCatalog: Send + Sync {
	/// List the entries of one catalog.
	async fn list(&self, slide_type: SlideType) -> CollaboratorResult<Vec<CatalogEntry>>;
}
