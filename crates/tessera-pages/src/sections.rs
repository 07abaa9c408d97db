//! Section model
//!
//! A section is one composable block of a landing page. The four kinds
//! are a tagged union: what a kind cannot carry simply is not a field of
//! its variant - a banner has no slider state, a form has no attachment.
//!
//! Hero and free-form sections can alternatively render as a *slider*, a
//! carousel over one external catalog (services, doctors, ...). The ids
//! picked for a slider belong to exactly one catalog; switching catalogs
//! clears them.

use serde::{Deserialize, Serialize};
use tessera_core::{Attachment, LocalizedText, Ranked};
use tessera_forms::FormSchema;

/// The four section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
	/// Full-width opening block.
	Hero,
	/// Free-form content block.
	#[serde(rename = "section")]
	Content,
	/// Image banner, optionally linking out. Never a slider.
	Banner,
	/// Embedded dynamic form.
	Form,
}

impl SectionType {
	/// Whether sections of this kind can render as a slider.
	pub fn supports_slider(self) -> bool {
		matches!(self, Self::Hero | Self::Content)
	}
}

/// The external catalogs a slider can iterate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideType {
	Services,
	Doctors,
	Blogs,
	Packages,
	Offers,
	Faqs,
}

impl SlideType {
	/// Whether slides of this catalog can carry a payment link.
	pub fn supports_payment_link(self) -> bool {
		matches!(self, Self::Packages | Self::Offers)
	}
}

/// Slider state: the chosen catalog and the ids picked from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
	/// Which catalog the carousel iterates over.
	pub slide_type: SlideType,
	/// The catalog entries chosen, keyed by `slide_type`.
	#[serde(default)]
	pub selected_entity_ids: Vec<i64>,
	/// Show a payment link per slide (packages/offers only).
	#[serde(default)]
	pub payment_link_enabled: bool,
}

impl SliderConfig {
	/// A slider over the given catalog with nothing selected yet.
	pub fn new(slide_type: SlideType) -> Self {
		Self {
			slide_type,
			selected_entity_ids: Vec::new(),
			payment_link_enabled: false,
		}
	}

	/// Switch the catalog, clearing the selection so ids never leak
	/// across catalogs. The payment flag survives only where the new
	/// catalog supports it.
	pub fn change_slide_type(&mut self, slide_type: SlideType) {
		if self.slide_type == slide_type {
			return;
		}
		self.slide_type = slide_type;
		self.selected_entity_ids.clear();
		if !slide_type.supports_payment_link() {
			self.payment_link_enabled = false;
		}
	}
}

/// How a hero/content section renders: static copy or a slider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "displayMode")]
pub enum Display {
	/// Static title/content/image rendering.
	#[default]
	#[serde(rename = "section")]
	Standard,
	/// Carousel over an external catalog.
	#[serde(rename = "slider")]
	Slider(SliderConfig),
}

impl Display {
	/// The slider state, when in slider mode.
	pub fn slider(&self) -> Option<&SliderConfig> {
		match self {
			Self::Standard => None,
			Self::Slider(config) => Some(config),
		}
	}
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
	#[default]
	Primary,
	Secondary,
	Outline,
}

/// A call-to-action button on a hero/content section.
///
/// Buttons carry no rank; their list position is presentation order
/// only, so removals never renumber anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionButton {
	/// Localized button label.
	pub text: LocalizedText,
	/// Target URL.
	pub link: String,
	/// Visual weight.
	#[serde(default)]
	pub style: CtaStyle,
	/// Open the target in a new tab.
	#[serde(default)]
	pub open_in_new_tab: bool,
}

impl CallToActionButton {
	/// An empty primary-style button.
	pub fn new() -> Self {
		Self::default()
	}
}

/// The kind-specific payload of a section.
///
/// Serialized internally tagged on `type`, so a section's wire shape is
/// one flat object with its kind's fields spliced in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
	/// Full-width opening block.
	Hero {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		attachment: Option<Attachment>,
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		buttons: Vec<CallToActionButton>,
		#[serde(flatten)]
		display: Display,
	},
	/// Free-form content block.
	#[serde(rename = "section")]
	Content {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		attachment: Option<Attachment>,
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		buttons: Vec<CallToActionButton>,
		#[serde(flatten)]
		display: Display,
	},
	/// Image banner. The variant has no display field: banners are
	/// never sliders.
	Banner {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		attachment: Option<Attachment>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		link: Option<String>,
	},
	/// Embedded dynamic form. The variant has no attachment field.
	Form {
		#[serde(flatten)]
		schema: FormSchema,
	},
}

impl SectionBody {
	/// The empty payload for a given kind.
	pub fn empty(section_type: SectionType) -> Self {
		match section_type {
			SectionType::Hero => Self::Hero {
				attachment: None,
				buttons: Vec::new(),
				display: Display::Standard,
			},
			SectionType::Content => Self::Content {
				attachment: None,
				buttons: Vec::new(),
				display: Display::Standard,
			},
			SectionType::Banner => Self::Banner {
				attachment: None,
				link: None,
			},
			SectionType::Form => Self::Form {
				schema: FormSchema::new(),
			},
		}
	}

	/// Which kind this payload belongs to.
	pub fn section_type(&self) -> SectionType {
		match self {
			Self::Hero { .. } => SectionType::Hero,
			Self::Content { .. } => SectionType::Content,
			Self::Banner { .. } => SectionType::Banner,
			Self::Form { .. } => SectionType::Form,
		}
	}
}

/// One composable block of a landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
	/// Persisted identifier; `None` until the page is saved.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Localized heading.
	pub title: LocalizedText,
	/// Localized body copy.
	pub content: LocalizedText,
	/// 1-based position within the page, contiguous across the page's
	/// section list.
	pub order: u32,
	/// Inactive sections are kept but not rendered publicly.
	pub active: bool,
	/// Kind-specific payload.
	#[serde(flatten)]
	pub body: SectionBody,
}

impl Section {
	/// A fresh, active, empty section of the given kind.
	pub fn new(section_type: SectionType, order: u32) -> Self {
		Self {
			id: None,
			title: LocalizedText::new(),
			content: LocalizedText::new(),
			order,
			active: true,
			body: SectionBody::empty(section_type),
		}
	}

	/// This section's kind.
	pub fn section_type(&self) -> SectionType {
		self.body.section_type()
	}

	/// The attachment, for kinds that carry one.
	pub fn attachment(&self) -> Option<&Attachment> {
		match &self.body {
			SectionBody::Hero { attachment, .. }
			| SectionBody::Content { attachment, .. }
			| SectionBody::Banner { attachment, .. } => attachment.as_ref(),
			SectionBody::Form { .. } => None,
		}
	}

	/// Call-to-action buttons; empty for kinds without them.
	pub fn buttons(&self) -> &[CallToActionButton] {
		match &self.body {
			SectionBody::Hero { buttons, .. } | SectionBody::Content { buttons, .. } => buttons,
			SectionBody::Banner { .. } | SectionBody::Form { .. } => &[],
		}
	}

	/// The display mode, for slider-capable kinds.
	pub fn display(&self) -> Option<&Display> {
		match &self.body {
			SectionBody::Hero { display, .. } | SectionBody::Content { display, .. } => {
				Some(display)
			}
			SectionBody::Banner { .. } | SectionBody::Form { .. } => None,
		}
	}

	/// The embedded form schema, for form sections.
	pub fn form_schema(&self) -> Option<&FormSchema> {
		match &self.body {
			SectionBody::Form { schema } => Some(schema),
			_ => None,
		}
	}
}

impl Ranked for Section {
	fn rank(&self) -> u32 {
		self.order
	}

	fn set_rank(&mut self, rank: u32) {
		self.order = rank;
	}
}
