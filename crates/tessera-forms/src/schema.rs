//! The form schema builder
//!
//! A [`FormSchema`] owns an ordered field list and the envelope the
//! runtime form needs. All mutation goes through the builder so that
//! field ids stay unique and the per-type side-tables (options, numeric
//! bounds) stay consistent with each field's type.

use crate::error::{FormSchemaError, FormSchemaResult};
use crate::fields::{FieldOption, FieldType, FormField, NumericBounds};
use serde::{Deserialize, Serialize};
use tessera_core::LocalizedText;

/// The schema of one `form`-type section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
	/// Ordered field definitions.
	#[serde(default)]
	fields: Vec<FormField>,
	/// Localized label of the submit button.
	#[serde(default)]
	pub submit_text: LocalizedText,
	/// Localized message shown after a successful submission.
	#[serde(default)]
	pub success_message: LocalizedText,
	/// Endpoint the rendered form submits to.
	#[serde(default)]
	pub api_endpoint: String,
}

impl FormSchema {
	/// Create an empty schema.
	pub fn new() -> Self {
		Self::default()
	}

	/// The ordered field definitions.
	pub fn fields(&self) -> &[FormField] {
		&self.fields
	}

	/// Append a field of the given type with a generated id.
	///
	/// Ids follow the `field-<n>` shape and are guaranteed unique within
	/// this schema, including against ids that survived a previous
	/// remove.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::{FieldType, FormSchema};
	///
	/// let mut schema = FormSchema::new();
	/// let id = schema.add_field(FieldType::Email).id.clone();
	/// assert_eq!(id, "field-1");
	/// ```
	pub fn add_field(&mut self, field_type: FieldType) -> &FormField {
		let id = self.fresh_field_id();
		self.fields.push(FormField::new(id, field_type));
		self.fields.last().expect("push succeeded")
	}

	/// Apply an edit to the field at `index`.
	///
	/// A stale index is a no-op; the closure only runs against a live
	/// field. Field type changes must go through
	/// [`change_field_type`](Self::change_field_type) so the side-tables
	/// stay consistent.
	pub fn update_field(&mut self, index: usize, edit: impl FnOnce(&mut FormField)) {
		match self.fields.get_mut(index) {
			Some(field) => edit(field),
			None => {
				tracing::warn!(index, "update_field target vanished; ignoring edit");
			}
		}
	}

	/// Remove the field at `index`, discarding its options with it.
	pub fn remove_field(&mut self, index: usize) {
		if index < self.fields.len() {
			self.fields.remove(index);
		} else {
			tracing::warn!(index, "remove_field target vanished; ignoring");
		}
	}

	/// Switch the field at `index` to a new type.
	///
	/// Side-tables that stop applying are cleared: switching away from a
	/// select/radio/checkbox type discards the options, switching away
	/// from `number` discards the bounds. Stale options never resurface
	/// on a later switch back.
	pub fn change_field_type(&mut self, index: usize, field_type: FieldType) {
		let Some(field) = self.fields.get_mut(index) else {
			tracing::warn!(index, "change_field_type target vanished; ignoring");
			return;
		};
		field.field_type = field_type;
		if !field_type.has_options() {
			field.options.clear();
		}
		if !field_type.is_numeric() {
			field.bounds = NumericBounds::default();
		}
	}

	/// Replace the id of the field at `index`.
	///
	/// Rejects ids already used by another field in this schema.
	pub fn set_field_id(&mut self, index: usize, id: impl Into<String>) -> FormSchemaResult<()> {
		let id = id.into();
		if self
			.fields
			.iter()
			.enumerate()
			.any(|(i, f)| i != index && f.id == id)
		{
			return Err(FormSchemaError::DuplicateFieldId(id));
		}
		let field = self
			.fields
			.get_mut(index)
			.ok_or(FormSchemaError::FieldNotFound(index))?;
		field.id = id;
		Ok(())
	}

	/// Append an empty option to the field at `field_index`.
	///
	/// # Errors
	///
	/// [`FormSchemaError::OptionsNotSupported`] when the field's type
	/// carries no options, [`FormSchemaError::FieldNotFound`] for a
	/// stale index.
	pub fn add_option(&mut self, field_index: usize) -> FormSchemaResult<()> {
		let field = self
			.fields
			.get_mut(field_index)
			.ok_or(FormSchemaError::FieldNotFound(field_index))?;
		if !field.field_type.has_options() {
			return Err(FormSchemaError::OptionsNotSupported(field.field_type));
		}
		field.options.push(FieldOption::default());
		Ok(())
	}

	/// Apply an edit to one option of one field.
	pub fn update_option(
		&mut self,
		field_index: usize,
		option_index: usize,
		edit: impl FnOnce(&mut FieldOption),
	) {
		match self
			.fields
			.get_mut(field_index)
			.and_then(|f| f.options.get_mut(option_index))
		{
			Some(option) => edit(option),
			None => {
				tracing::warn!(field_index, option_index, "update_option target vanished; ignoring edit");
			}
		}
	}

	/// Remove one option of one field. List position carries no meaning,
	/// so nothing is renumbered.
	pub fn remove_option(&mut self, field_index: usize, option_index: usize) {
		match self.fields.get_mut(field_index) {
			Some(field) if option_index < field.options.len() => {
				field.options.remove(option_index);
			}
			_ => {
				tracing::warn!(field_index, option_index, "remove_option target vanished; ignoring");
			}
		}
	}

	// Smallest n for which "field-<n>" is unused. Scanning instead of a
	// stored counter keeps deserialized schemas collision-free.
	fn fresh_field_id(&self) -> String {
		let mut n = self.fields.len() + 1;
		loop {
			let candidate = format!("field-{n}");
			if !self.fields.iter().any(|f| f.id == candidate) {
				return candidate;
			}
			n += 1;
		}
	}
}
