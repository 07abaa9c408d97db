//! Dynamic form-schema builder module.
//!
//! This module provides access to tessera-forms: field definitions,
//! option lists, numeric bounds, and the schema builder embedded in
//! `form`-type sections.
//!
//! # Examples
//!
//! ```rust
//! use tessera::forms::{FieldType, FormSchema};
//!
//! let mut schema = FormSchema::new();
//! schema.add_field(FieldType::Email);
//! assert_eq!(schema.fields().len(), 1);
//! ```

pub use tessera_forms::*;
