//! Tests for the path-addressed media tree

use rstest::rstest;
use std::sync::Arc;
use tessera_core::Attachment;
use tessera_media::{MediaError, MediaLibrary};

fn attachment(id: i64) -> Attachment {
	Attachment::new(
		id,
		format!("https://cdn.example.com/thumb/{id}.webp"),
		format!("https://cdn.example.com/full/{id}.png"),
	)
}

/// Library with roots "Campaigns" and "Archive", plus
/// Campaigns/Summer. Returns (library, campaigns_id, summer_id,
/// archive_id).
fn seeded() -> (MediaLibrary, String, String, String) {
	let library = MediaLibrary::new();
	let (library, campaigns) = library.create_folder(&[], "Campaigns").unwrap();
	let (library, archive) = library.create_folder(&[], "Archive").unwrap();
	let (library, summer) = library
		.create_folder(std::slice::from_ref(&campaigns), "Summer")
		.unwrap();
	(library, campaigns, summer, archive)
}

// --- Happy Path ---

#[rstest]
fn create_at_root_and_nested() {
	// Arrange & Act
	let (library, campaigns, summer, _) = seeded();

	// Assert
	assert_eq!(library.roots().len(), 2);
	let path = vec![campaigns.clone(), summer];
	let folder = library.resolve(&path).unwrap();
	assert_eq!(folder.name, "Summer");
	assert!(folder.sub_folders.is_empty());
}

#[rstest]
fn folder_create_then_delete_scenario() {
	// Arrange - root has folder F1
	let (library, f1) = MediaLibrary::new().create_folder(&[], "F1").unwrap();

	// Act - create a subfolder, then delete it again
	let (library, sub) = library.create_folder(std::slice::from_ref(&f1), "Sub").unwrap();
	assert_eq!(library.resolve(std::slice::from_ref(&f1)).unwrap().sub_folders.len(), 1);
	let library = library.delete_folder(&[f1.clone(), sub]).unwrap();

	// Assert - F1 is back to zero subfolders
	assert!(library.resolve(std::slice::from_ref(&f1)).unwrap().sub_folders.is_empty());

	// Act - deleting F1 itself removes it from the root list
	let library = library.delete_folder(std::slice::from_ref(&f1)).unwrap();

	// Assert
	assert!(library.roots().is_empty());
}

#[rstest]
fn upload_and_delete_file() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let path = vec![campaigns, summer];

	// Act
	let library = library.upload_file(&path, "hero.png", attachment(1)).unwrap();
	let library = library.upload_file(&path, "banner.png", attachment(2)).unwrap();

	// Assert
	let folder = library.resolve(&path).unwrap();
	assert_eq!(folder.files.len(), 2);
	assert_eq!(folder.files[0].name, "hero.png");

	// Act - delete one by id
	let doomed = folder.files[0].id.clone();
	let library = library.delete_file(&path, &doomed).unwrap();

	// Assert
	let folder = library.resolve(&path).unwrap();
	assert_eq!(folder.files.len(), 1);
	assert_eq!(folder.files[0].name, "banner.png");
}

#[rstest]
fn breadcrumbs_walk_names_in_path_order() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();

	// Act
	let crumbs = library.breadcrumbs(&[campaigns.clone(), summer.clone()]);

	// Assert
	let names: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
	assert_eq!(names, vec!["Campaigns", "Summer"]);
	assert_eq!(crumbs[0].id, campaigns);
	assert_eq!(crumbs[1].id, summer);
}

// --- Structural Sharing ---

#[rstest]
fn untouched_roots_are_reference_identical_after_nested_create() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let archive_before = Arc::clone(&library.roots()[1]);

	// Act - mutate deep inside the first root
	let (after, _) = library
		.create_folder(&[campaigns, summer], "June")
		.unwrap();

	// Assert - the sibling root is the same allocation, the touched
	// spine is not
	assert!(Arc::ptr_eq(&archive_before, &after.roots()[1]));
	assert!(!Arc::ptr_eq(&library.roots()[0], &after.roots()[0]));
}

#[rstest]
fn untouched_siblings_are_reference_identical_after_delete() {
	// Arrange - two subfolders under the same parent
	let (library, f1) = MediaLibrary::new().create_folder(&[], "F1").unwrap();
	let (library, keep) = library.create_folder(std::slice::from_ref(&f1), "Keep").unwrap();
	let (library, drop) = library.create_folder(std::slice::from_ref(&f1), "Drop").unwrap();
	let keep_before = Arc::clone(&library.resolve(std::slice::from_ref(&f1)).unwrap().sub_folders[0]);
	assert_eq!(keep_before.id, keep);

	// Act
	let after = library.delete_folder(&[f1.clone(), drop]).unwrap();

	// Assert
	let survivors = &after.resolve(std::slice::from_ref(&f1)).unwrap().sub_folders;
	assert_eq!(survivors.len(), 1);
	assert!(Arc::ptr_eq(&keep_before, &survivors[0]));
}

#[rstest]
fn operations_never_mutate_the_receiver() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let snapshot = library.clone();

	// Act
	let _ = library.create_folder(&[campaigns.clone()], "X").unwrap();
	let _ = library.delete_folder(&[campaigns.clone(), summer.clone()]).unwrap();
	let _ = library
		.upload_file(&[campaigns, summer], "a.png", attachment(9))
		.unwrap();

	// Assert
	assert_eq!(library, snapshot);
}

// --- Error Path ---

#[rstest]
fn stale_paths_are_normal_outcomes() {
	// Arrange
	let (library, campaigns, summer, archive) = seeded();
	let library = library.delete_folder(std::slice::from_ref(&campaigns)).unwrap();
	let stale = vec![campaigns.clone(), summer];

	// Act & Assert - resolve degrades to None
	assert!(library.resolve(&stale).is_none());

	// Act & Assert - mutations report PathNotFound, library unchanged
	assert_eq!(
		library.create_folder(&stale, "X").unwrap_err(),
		MediaError::PathNotFound(stale.clone())
	);
	assert!(matches!(
		library.delete_folder(&stale).unwrap_err(),
		MediaError::PathNotFound(_)
	));
	assert!(matches!(
		library.upload_file(&stale, "a.png", attachment(1)).unwrap_err(),
		MediaError::PathNotFound(_)
	));

	// Act & Assert - breadcrumbs stop early instead of erroring
	assert!(library.breadcrumbs(&stale).is_empty());
	assert_eq!(library.breadcrumbs(std::slice::from_ref(&archive)).len(), 1);
}

#[rstest]
fn files_cannot_live_at_the_root() {
	// Arrange
	let library = MediaLibrary::new();

	// Act & Assert
	assert_eq!(
		library.upload_file(&[], "a.png", attachment(1)).unwrap_err(),
		MediaError::RootUpload
	);
}

#[rstest]
fn delete_missing_file_keeps_library_unchanged() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let path = vec![campaigns, summer];

	// Act
	let after = library.delete_file(&path, "no-such-file").unwrap();

	// Assert
	assert_eq!(after, library);
}

#[rstest]
fn delete_with_empty_path_is_rejected() {
	// Arrange
	let (library, ..) = seeded();

	// Act & Assert
	assert_eq!(library.delete_folder(&[]).unwrap_err(), MediaError::EmptyPath);
	assert_eq!(
		library.delete_file(&[], "x").unwrap_err(),
		MediaError::EmptyPath
	);
}

// --- Sanity ---

#[rstest]
fn resolve_is_deterministic() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let path = vec![campaigns, summer];

	// Act
	let first = library.resolve(&path).unwrap();
	let second = library.resolve(&path).unwrap();

	// Assert
	assert_eq!(first, second);
	assert!(std::ptr::eq(first, second));
}

#[rstest]
fn library_round_trips_through_json() {
	// Arrange
	let (library, campaigns, summer, _) = seeded();
	let library = library
		.upload_file(&[campaigns, summer], "hero.png", attachment(1))
		.unwrap();

	// Act
	let json = serde_json::to_string(&library).unwrap();
	let back: MediaLibrary = serde_json::from_str(&json).unwrap();

	// Assert
	assert_eq!(back, library);
}
