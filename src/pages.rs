//! Landing-page composition module.
//!
//! This module provides access to tessera-pages: the tagged section
//! variants, the page value, the SEO record, the editing layer with its
//! draft-session identity capture, save-time advisories, and the
//! persistence/catalog collaborator seams.
//!
//! # Examples
//!
//! ```rust
//! use tessera::pages::{PageEditor, SectionType};
//!
//! let mut editor = PageEditor::blank("landing");
//! let draft = editor.add_section(SectionType::Hero);
//! assert_eq!(draft.section().order, 1);
//! ```

pub use tessera_pages::*;
