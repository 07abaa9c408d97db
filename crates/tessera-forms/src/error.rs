//! Form-schema builder errors

use crate::fields::FieldType;
use thiserror::Error;

/// Errors raised while assembling a form schema.
///
/// These never reach an operator directly; the editing layer catches
/// them at the mutation boundary and degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormSchemaError {
	/// Option operations only apply to select/radio/checkbox fields.
	#[error("Field type {0:?} does not carry options")]
	OptionsNotSupported(FieldType),

	/// A field id must stay unique within its schema.
	#[error("Field id already in use: {0}")]
	DuplicateFieldId(String),

	/// The addressed field no longer exists (stale index).
	#[error("No field at index {0}")]
	FieldNotFound(usize),
}

/// Result type for schema-builder operations.
pub type FormSchemaResult<T> = Result<T, FormSchemaError>;
