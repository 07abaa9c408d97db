//! The page value
//!
//! A page is identity (slug), localized copy, visibility flags, an SEO
//! record, and the ordered section list. The section-order invariant
//! (contiguous from 1) is maintained by [`crate::editor::PageEditor`];
//! a page loaded from a collaborator is normalized on entry.

use crate::sections::Section;
use crate::seo::SeoRecord;
use serde::{Deserialize, Serialize};
use tessera_core::{LocalizedText, ordering};

/// One landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
	/// Persisted identifier; `None` until first saved.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// URL-safe identity, unique across pages.
	pub slug: String,
	/// Localized navigation name.
	pub name: LocalizedText,
	/// Localized page title.
	pub title: LocalizedText,
	/// Localized long description.
	pub description: LocalizedText,
	/// Localized `<title>` override.
	pub meta_title: LocalizedText,
	/// Localized meta description.
	pub meta_description: LocalizedText,
	/// Show a menu entry for this page.
	pub show_in_menu: bool,
	/// Show a footer entry for this page.
	pub show_in_footer: bool,
	/// Ordered sections; serialized ascending by `order`.
	#[serde(default)]
	pub sections: Vec<Section>,
	/// SEO metadata.
	#[serde(default, skip_serializing_if = "SeoRecord::is_empty")]
	pub seo: SeoRecord,
}

impl Page {
	/// A blank page with the given slug and no sections.
	pub fn new(slug: impl Into<String>) -> Self {
		Self {
			id: None,
			slug: slug.into(),
			name: LocalizedText::new(),
			title: LocalizedText::new(),
			description: LocalizedText::new(),
			meta_title: LocalizedText::new(),
			meta_description: LocalizedText::new(),
			show_in_menu: false,
			show_in_footer: false,
			sections: Vec::new(),
			seo: SeoRecord::default(),
		}
	}

	/// The section currently at the given order, if any.
	pub fn section_by_order(&self, order: u32) -> Option<&Section> {
		self.sections.iter().find(|s| s.order == order)
	}

	/// Sort sections ascending and compact their orders to `1..=n`.
	///
	/// Collaborator payloads are not trusted to uphold the contiguity
	/// invariant; the editor calls this once on entry.
	pub fn normalize_sections(&mut self) {
		ordering::renumber(&mut self.sections);
	}
}
