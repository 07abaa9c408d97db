//! # Tessera
//!
//! A structured-content composition engine for multilingual landing
//! pages: typed ordered sections, a dynamic form-schema builder, and a
//! path-addressed media folder tree.
//!
//! Tessera is the authoring core only. Persistence, upload transport,
//! authentication, and rendering are external collaborators that accept
//! and return the data model verbatim; the engine owns the invariants
//! that make careless re-implementations go wrong - contiguous section
//! ordering under insert/delete/move, path-based tree mutation with
//! structural sharing, and schema-driven field consistency.
//!
//! ## Feature Flags
//!
//! - `pages` - section/page models and the editing layer (pulls `forms`)
//! - `forms` - the dynamic form-schema builder
//! - `media` - the media folder tree
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use tessera::prelude::*;
//!
//! let mut editor = PageEditor::blank("pediatric-dentistry");
//! editor.set_name(Locale::Primary, "Pediatric dentistry");
//!
//! let mut hero = editor.add_section(SectionType::Hero);
//! hero.set_title(Locale::Primary, "Welcome");
//! editor.update_section(&hero);
//!
//! editor.add_section(SectionType::Banner);
//! editor.reorder_sections(0, 1);
//!
//! let orders: Vec<u32> = editor.page().sections.iter().map(|s| s.order).collect();
//! assert_eq!(orders, vec![1, 2]);
//! ```

// Module re-exports per subsystem
pub mod core;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "media")]
pub mod media;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export core value types at the crate root
pub use tessera_core::{Attachment, CollaboratorError, Locale, LocalizedText};

#[cfg(feature = "forms")]
pub use tessera_forms::{FieldType, FormField, FormSchema};

#[cfg(feature = "media")]
pub use tessera_media::{AssetStore, MediaFolder, MediaLibrary};

#[cfg(feature = "pages")]
pub use tessera_pages::{Page, PageEditor, PageStore, Section, SectionDraft, SectionType};

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use tessera_core::prelude::*;

	#[cfg(feature = "forms")]
	pub use tessera_forms::prelude::*;

	#[cfg(feature = "media")]
	pub use tessera_media::prelude::*;

	#[cfg(feature = "pages")]
	pub use tessera_pages::prelude::*;
}
