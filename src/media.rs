//! Media folder tree module.
//!
//! This module provides access to tessera-media: the immutable,
//! path-addressed folder/file tree and the upload collaborator seam.
//!
//! # Examples
//!
//! ```rust
//! use tessera::media::MediaLibrary;
//!
//! let library = MediaLibrary::new();
//! let (library, campaigns) = library.create_folder(&[], "Campaigns").unwrap();
//! assert_eq!(library.breadcrumbs(&[campaigns])[0].name, "Campaigns");
//! ```

pub use tessera_media::*;
