//! Save-time advisories
//!
//! Advisories are hints surfaced next to fields before a save: missing
//! localized copy, an ill-formed slug, SEO text past its truncation
//! budget, an image slot left empty. They are never preconditions - any
//! draft is a legal in-memory value and round-trips losslessly; the
//! external API stays the authority on acceptance.

use crate::limits;
use crate::pages::Page;
use crate::sections::{Display, Section, SectionBody};
use regex::Regex;
use std::sync::LazyLock;
use tessera_core::{Locale, LocalizedText};

// Lowercase words separated by single hyphens.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("SLUG_REGEX: invalid regex pattern")
});

/// How loudly an advisory should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	/// Cosmetic; worth a look.
	Hint,
	/// Probably a mistake; still saveable.
	Warning,
}

/// One finding against a page draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
	/// Presentation urgency.
	pub severity: Severity,
	/// Dotted path of the field the finding anchors to.
	pub field: String,
	/// Operator-facing message.
	pub message: String,
}

impl Advisory {
	fn hint(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Hint,
			field: field.into(),
			message: message.into(),
		}
	}

	fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warning,
			field: field.into(),
			message: message.into(),
		}
	}
}

/// Review a page draft and collect advisories.
///
/// An empty result is not required for saving.
pub fn review_page(page: &Page) -> Vec<Advisory> {
	let mut findings = Vec::new();

	if page.slug.is_empty() {
		findings.push(Advisory::warning("slug", "Slug is empty"));
	} else if !SLUG_REGEX.is_match(&page.slug) {
		findings.push(Advisory::warning(
			"slug",
			"Slug must be lowercase words separated by single hyphens",
		));
	} else if page.slug.chars().count() > limits::SLUG_MAX_CHARS {
		findings.push(Advisory::hint("slug", "Slug is unusually long"));
	}

	check_presence(&mut findings, "name", &page.name);
	check_presence(&mut findings, "title", &page.title);

	check_length(
		&mut findings,
		"metaTitle",
		&page.meta_title,
		limits::META_TITLE_MAX_CHARS,
	);
	check_length(
		&mut findings,
		"metaDescription",
		&page.meta_description,
		limits::META_DESCRIPTION_MAX_CHARS,
	);
	if let Some(og_title) = &page.seo.og_title {
		check_length(&mut findings, "seo.ogTitle", og_title, limits::OG_TITLE_MAX_CHARS);
	}

	for section in &page.sections {
		review_section(&mut findings, section);
	}

	findings
}

fn review_section(findings: &mut Vec<Advisory>, section: &Section) {
	let at = |suffix: &str| format!("sections[{}].{suffix}", section.order);

	if section.title.is_blank() {
		findings.push(Advisory::warning(at("title"), "Section has no title"));
	}

	match &section.body {
		SectionBody::Hero {
			attachment,
			display,
			..
		}
		| SectionBody::Content {
			attachment,
			display,
			..
		} => match display {
			Display::Standard => {
				if attachment.is_none() {
					findings.push(Advisory::hint(at("attachment"), "No image selected"));
				}
			}
			Display::Slider(config) => {
				if config.selected_entity_ids.is_empty() {
					findings.push(Advisory::hint(
						at("selectedEntityIds"),
						"Slider has nothing selected",
					));
				}
			}
		},
		SectionBody::Banner { attachment, .. } => {
			if attachment.is_none() {
				findings.push(Advisory::hint(at("attachment"), "Banner has no image"));
			}
		}
		SectionBody::Form { schema } => {
			if schema.fields().is_empty() {
				findings.push(Advisory::warning(at("formFields"), "Form has no fields"));
			}
		}
	}
}

fn check_presence(findings: &mut Vec<Advisory>, field: &str, text: &LocalizedText) {
	for (locale, suffix) in [(Locale::Primary, "en"), (Locale::Secondary, "ar")] {
		if !text.has(locale) {
			findings.push(Advisory::warning(
				format!("{field}.{suffix}"),
				format!("Missing {suffix} text"),
			));
		}
	}
}

fn check_length(findings: &mut Vec<Advisory>, field: &str, text: &LocalizedText, budget: usize) {
	for (locale, suffix) in [(Locale::Primary, "en"), (Locale::Secondary, "ar")] {
		let count = text.get(locale).chars().count();
		if count > budget {
			findings.push(Advisory::hint(
				format!("{field}.{suffix}"),
				format!("{count} characters; search results truncate around {budget}"),
			));
		}
	}
}
