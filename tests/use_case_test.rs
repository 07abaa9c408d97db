//! End-to-end use case tests combining the Tessera subsystems

use rstest::rstest;
use tessera::forms::FieldType;
use tessera::media::MediaLibrary;
use tessera::pages::{PageEditor, SectionType, SlideType};
use tessera::{Attachment, Locale};

#[rstest]
fn compose_a_landing_page_end_to_end() {
	// Arrange - organize campaign imagery first
	let library = MediaLibrary::new();
	let (library, campaigns) = library.create_folder(&[], "Campaigns").unwrap();
	let path = vec![campaigns];
	let library = library
		.upload_file(
			&path,
			"hero.png",
			Attachment::new(1, "https://cdn.example.com/t/1.webp", "https://cdn.example.com/o/1.png"),
		)
		.unwrap();
	let hero_image = library.resolve(&path).unwrap().files[0].attachment.clone();

	// Act - compose the page
	let mut editor = PageEditor::blank("pediatric-dentistry");
	editor.set_name(Locale::Primary, "Pediatric dentistry");
	editor.set_name(Locale::Secondary, "طب أسنان الأطفال");

	let mut hero = editor.add_section(SectionType::Hero);
	hero.set_title(Locale::Primary, "Gentle care for small smiles");
	hero.set_attachment(Some(hero_image.clone()));
	hero.add_button();
	hero.update_button(0, |button| button.link = "/book".to_string());
	editor.update_section(&hero);

	let mut doctors = editor.add_section(SectionType::Content);
	doctors.set_title(Locale::Primary, "Our doctors");
	doctors.toggle_display_mode();
	doctors.change_slide_type(SlideType::Doctors);
	doctors.select_entities(vec![4, 7]);
	editor.update_section(&doctors);

	let mut contact = editor.add_section(SectionType::Form);
	contact.set_title(Locale::Primary, "Book a visit");
	{
		let schema = contact.form_schema_mut().unwrap();
		schema.add_field(FieldType::Text);
		schema.add_field(FieldType::Tel);
		schema.api_endpoint = "/api/appointments".to_string();
	}
	editor.update_section(&contact);

	// The operator promotes the form above the slider
	editor.reorder_sections(2, 1);

	// Assert - ordering, typed payloads, and the shared attachment
	let page = editor.page();
	let orders: Vec<u32> = page.sections.iter().map(|s| s.order).collect();
	assert_eq!(orders, vec![1, 2, 3]);
	assert_eq!(page.sections[0].section_type(), SectionType::Hero);
	assert_eq!(page.sections[1].section_type(), SectionType::Form);
	assert_eq!(page.sections[2].section_type(), SectionType::Content);
	assert_eq!(page.sections[0].attachment(), Some(&hero_image));
	assert_eq!(page.sections[1].form_schema().unwrap().fields().len(), 2);

	// Assert - the whole page survives the wire
	let json = serde_json::to_string(page).unwrap();
	let back: tessera::Page = serde_json::from_str(&json).unwrap();
	assert_eq!(&back, page);
}

#[rstest]
fn media_edits_do_not_disturb_open_pages() {
	// Arrange - a page referencing an uploaded asset
	let library = MediaLibrary::new();
	let (library, folder) = library.create_folder(&[], "Assets").unwrap();
	let asset = Attachment::new(9, "https://cdn.example.com/t/9.webp", "https://cdn.example.com/o/9.png");
	let library = library
		.upload_file(&[folder.clone()], "banner.png", asset.clone())
		.unwrap();

	let mut editor = PageEditor::blank("offers");
	let mut banner = editor.add_section(SectionType::Banner);
	banner.set_attachment(Some(asset.clone()));
	editor.update_section(&banner);

	// Act - the operator deletes the folder afterwards
	let library = library.delete_folder(&[folder]).unwrap();

	// Assert - the tree is empty, the page still carries the descriptor
	assert!(library.roots().is_empty());
	assert_eq!(editor.page().sections[0].attachment(), Some(&asset));
}
