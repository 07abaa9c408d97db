//! # Tessera Forms
//!
//! The dynamic form-schema builder embedded in `form`-type sections.
//!
//! A [`FormSchema`] is an ordered list of [`FormField`] definitions plus
//! the envelope a runtime form renderer needs (submit label, success
//! message, submission endpoint). The builder only *assembles* the
//! schema; executing validation against end-user input is the job of the
//! public-facing form that consumes it.
//!
//! ```
//! use tessera_forms::{FieldType, FormSchema};
//!
//! let mut schema = FormSchema::new();
//! schema.add_field(FieldType::Text);
//! schema.add_field(FieldType::Select);
//! schema.add_option(1).unwrap();
//!
//! assert_eq!(schema.fields().len(), 2);
//! assert_eq!(schema.fields()[1].options.len(), 1);
//! ```

pub mod error;
pub mod fields;
pub mod schema;

pub use error::{FormSchemaError, FormSchemaResult};
pub use fields::{FieldOption, FieldType, FormField, NumericBounds};
pub use schema::FormSchema;

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use crate::error::{FormSchemaError, FormSchemaResult};
	pub use crate::fields::{FieldOption, FieldType, FormField, NumericBounds};
	pub use crate::schema::FormSchema;
}
