//! SEO metadata record
//!
//! Every field is independently optional; the record has no structural
//! invariants of its own. Advisory length checks live in
//! [`crate::advisory`], not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_core::LocalizedText;

/// Per-page SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoRecord {
	/// The keyword the page is optimized for.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub focus_keyword: Option<String>,
	/// Canonical URL when this page mirrors content published elsewhere.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub canonical_url: Option<String>,
	/// Raw robots directive (e.g. `noindex, nofollow`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub robots: Option<String>,
	/// schema.org type for structured-data markup.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema_type: Option<String>,

	// Open Graph
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_title: Option<LocalizedText>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_description: Option<LocalizedText>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_image: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_site_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub og_locale: Option<String>,

	// Twitter cards
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_card: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_title: Option<LocalizedText>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_description: Option<LocalizedText>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_image: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_site: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_creator: Option<String>,

	// Authorship
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub publisher: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub published_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub modified_at: Option<DateTime<Utc>>,

	// Misc
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub breadcrumb_title: Option<LocalizedText>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub no_index: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub no_follow: Option<bool>,
	/// Extra markup appended verbatim to the page head.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub head_extra: Option<String>,
}

impl SeoRecord {
	/// Whether no field has been filled in.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}
