//! Two-locale text values
//!
//! Every user-facing string in Tessera carries a primary and a secondary
//! locale variant. The pair is a plain value: both slots are always
//! present, the empty string is a legal variant, and serialization is a
//! flat two-key object (never an array, never `null`).

use serde::{Deserialize, Serialize};

/// The two locale slots every localized value carries.
///
/// The concrete locale codes (`en`/`ar`) only appear on the wire;
/// application code addresses the slots positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
	/// The primary authoring locale (serialized as `en`).
	Primary,
	/// The secondary authoring locale (serialized as `ar`).
	Secondary,
}

/// A string with one variant per locale slot.
///
/// Missing keys coalesce to the empty string on read; writing always
/// emits both keys.
///
/// # Examples
///
/// ```
/// use tessera_core::{Locale, LocalizedText};
///
/// let mut text = LocalizedText::from_parts("Home", "الرئيسية");
/// assert_eq!(text.get(Locale::Primary), "Home");
///
/// text.set(Locale::Secondary, "الصفحة الرئيسية");
/// assert_eq!(text.get(Locale::Primary), "Home");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
	/// Primary locale variant.
	#[serde(default)]
	pub en: String,
	/// Secondary locale variant.
	#[serde(default)]
	pub ar: String,
}

impl LocalizedText {
	/// Create a value with both variants empty.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a value from both variants at once.
	pub fn from_parts(en: impl Into<String>, ar: impl Into<String>) -> Self {
		Self {
			en: en.into(),
			ar: ar.into(),
		}
	}

	/// Read one locale variant.
	pub fn get(&self, locale: Locale) -> &str {
		match locale {
			Locale::Primary => &self.en,
			Locale::Secondary => &self.ar,
		}
	}

	/// Replace one locale variant, leaving the other untouched.
	pub fn set(&mut self, locale: Locale, value: impl Into<String>) {
		match locale {
			Locale::Primary => self.en = value.into(),
			Locale::Secondary => self.ar = value.into(),
		}
	}

	/// Whether the given variant holds any non-whitespace content.
	pub fn has(&self, locale: Locale) -> bool {
		!self.get(locale).trim().is_empty()
	}

	/// Whether both variants are empty or whitespace-only.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_core::LocalizedText;
	///
	/// assert!(LocalizedText::new().is_blank());
	/// assert!(LocalizedText::from_parts("  ", "").is_blank());
	/// assert!(!LocalizedText::from_parts("Home", "").is_blank());
	/// ```
	pub fn is_blank(&self) -> bool {
		!self.has(Locale::Primary) && !self.has(Locale::Secondary)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn set_one_locale_does_not_disturb_the_other() {
		// Arrange
		let mut text = LocalizedText::from_parts("Doctors", "الأطباء");

		// Act
		text.set(Locale::Primary, "Our Doctors");

		// Assert
		assert_eq!(text.get(Locale::Primary), "Our Doctors");
		assert_eq!(text.get(Locale::Secondary), "الأطباء");
	}

	#[rstest]
	#[case("", "", true)]
	#[case("   ", "\t", true)]
	#[case("x", "", false)]
	#[case("", "س", false)]
	fn is_blank_cases(#[case] en: &str, #[case] ar: &str, #[case] expected: bool) {
		// Arrange
		let text = LocalizedText::from_parts(en, ar);

		// Act & Assert
		assert_eq!(text.is_blank(), expected);
	}
}
