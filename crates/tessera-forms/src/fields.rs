//! Form field definitions
//!
//! A [`FormField`] describes one input of a runtime-rendered form: its
//! type, localized labels, requiredness, and - depending on the type -
//! selectable options or numeric bounds.

use serde::{Deserialize, Serialize};
use tessera_core::LocalizedText;

/// The input types a form field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	Text,
	Email,
	Tel,
	Number,
	Textarea,
	Select,
	Radio,
	Checkbox,
	Date,
	Time,
	File,
}

impl FieldType {
	/// Whether fields of this type carry a list of selectable options.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::FieldType;
	///
	/// assert!(FieldType::Select.has_options());
	/// assert!(FieldType::Radio.has_options());
	/// assert!(!FieldType::Text.has_options());
	/// ```
	pub fn has_options(self) -> bool {
		matches!(self, Self::Select | Self::Radio | Self::Checkbox)
	}

	/// Whether fields of this type carry numeric bounds.
	pub fn is_numeric(self) -> bool {
		matches!(self, Self::Number)
	}
}

/// One selectable choice of a select/radio/checkbox field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
	/// The value submitted when this choice is picked.
	pub value: String,
	/// The operator-facing label.
	pub label: LocalizedText,
}

impl FieldOption {
	/// Create an option from its submitted value and localized label.
	pub fn new(value: impl Into<String>, label: LocalizedText) -> Self {
		Self {
			value: value.into(),
			label,
		}
	}
}

/// Inclusive numeric bounds for a `number` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
	/// Smallest accepted value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	/// Largest accepted value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
}

impl NumericBounds {
	/// Whether no bound is set in either direction.
	pub fn is_unbounded(&self) -> bool {
		self.min.is_none() && self.max.is_none()
	}
}

/// One input definition inside a form schema.
///
/// `options` is meaningful only when [`FieldType::has_options`] holds;
/// `bounds` only for [`FieldType::Number`]. The schema builder keeps
/// those side-tables cleared when the field type says they do not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
	/// Identifier, unique within the owning schema.
	pub id: String,
	/// Operator-facing label.
	pub label: LocalizedText,
	/// Input type.
	#[serde(rename = "type")]
	pub field_type: FieldType,
	/// Hint text rendered inside the empty input.
	pub placeholder: LocalizedText,
	/// Whether the runtime form must refuse submission without a value.
	pub required: bool,
	/// Selectable choices (select/radio/checkbox only).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<FieldOption>,
	/// Numeric validation bounds (number fields only).
	#[serde(default, skip_serializing_if = "NumericBounds::is_unbounded")]
	pub bounds: NumericBounds,
}

impl FormField {
	/// Create a field with the given id and type and everything else
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::{FieldType, FormField};
	///
	/// let field = FormField::new("field-1", FieldType::Email);
	/// assert_eq!(field.id, "field-1");
	/// assert!(!field.required);
	/// assert!(field.options.is_empty());
	/// ```
	pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			id: id.into(),
			label: LocalizedText::new(),
			field_type,
			placeholder: LocalizedText::new(),
			required: false,
			options: Vec::new(),
			bounds: NumericBounds::default(),
		}
	}

	/// Set the localized label.
	pub fn with_label(mut self, label: LocalizedText) -> Self {
		self.label = label;
		self
	}

	/// Set the localized placeholder.
	pub fn with_placeholder(mut self, placeholder: LocalizedText) -> Self {
		self.placeholder = placeholder;
		self
	}

	/// Mark the field as required.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::{FieldType, FormField};
	///
	/// let field = FormField::new("field-1", FieldType::Text).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set numeric bounds.
	///
	/// Meaningful only for [`FieldType::Number`]; the schema builder
	/// clears bounds when the type changes to anything else.
	pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
		self.bounds = NumericBounds { min, max };
		self
	}
}
