//! Core value types module.
//!
//! This module provides access to the shared value types: localized
//! text, attachment descriptors, the ordering engine, and the
//! collaborator error taxonomy.
//!
//! # Examples
//!
//! ```rust
//! use tessera::core::{Locale, LocalizedText};
//!
//! let text = LocalizedText::from_parts("Home", "الرئيسية");
//! assert_eq!(text.get(Locale::Primary), "Home");
//! ```

pub use tessera_core::*;
