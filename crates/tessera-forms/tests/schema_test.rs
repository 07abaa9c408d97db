//! Tests for the form schema builder

use rstest::rstest;
use tessera_core::{Locale, LocalizedText};
use tessera_forms::{FieldType, FormSchema, FormSchemaError};

// --- Happy Path ---

#[rstest]
fn add_field_generates_unique_ids() {
	// Arrange
	let mut schema = FormSchema::new();

	// Act
	schema.add_field(FieldType::Text);
	schema.add_field(FieldType::Email);
	schema.add_field(FieldType::Select);

	// Assert
	let ids: Vec<&str> = schema.fields().iter().map(|f| f.id.as_str()).collect();
	assert_eq!(ids, vec!["field-1", "field-2", "field-3"]);
}

#[rstest]
fn add_field_skips_ids_surviving_a_remove() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Text);
	schema.add_field(FieldType::Text);
	schema.add_field(FieldType::Text);

	// Act - removing "field-1" leaves "field-2"/"field-3" alive
	schema.remove_field(0);
	schema.add_field(FieldType::Email);

	// Assert - the new id collides with nothing
	let ids: Vec<&str> = schema.fields().iter().map(|f| f.id.as_str()).collect();
	assert_eq!(ids, vec!["field-2", "field-3", "field-1"]);
	let unique: std::collections::HashSet<&&str> = ids.iter().collect();
	assert_eq!(unique.len(), ids.len());
}

#[rstest]
fn update_field_edits_in_place() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Text);

	// Act
	schema.update_field(0, |field| {
		field.label.set(Locale::Primary, "Full name");
		field.required = true;
	});

	// Assert
	assert_eq!(schema.fields()[0].label.get(Locale::Primary), "Full name");
	assert!(schema.fields()[0].required);
}

#[rstest]
fn option_lifecycle() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Radio);

	// Act
	schema.add_option(0).unwrap();
	schema.add_option(0).unwrap();
	schema.update_option(0, 1, |option| {
		option.value = "clinic".to_string();
		option.label = LocalizedText::from_parts("Clinic visit", "زيارة العيادة");
	});
	schema.remove_option(0, 0);

	// Assert - the edited option survives, unindexed removal did not renumber anything
	let options = &schema.fields()[0].options;
	assert_eq!(options.len(), 1);
	assert_eq!(options[0].value, "clinic");
}

// --- Error Path ---

#[rstest]
#[case(FieldType::Text)]
#[case(FieldType::Number)]
#[case(FieldType::Date)]
fn add_option_rejects_optionless_types(#[case] field_type: FieldType) {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(field_type);

	// Act
	let result = schema.add_option(0);

	// Assert
	assert_eq!(result, Err(FormSchemaError::OptionsNotSupported(field_type)));
}

#[rstest]
fn add_option_rejects_stale_index() {
	// Arrange
	let mut schema = FormSchema::new();

	// Act & Assert
	assert_eq!(schema.add_option(3), Err(FormSchemaError::FieldNotFound(3)));
}

#[rstest]
fn set_field_id_rejects_duplicates() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Text);
	schema.add_field(FieldType::Text);

	// Act
	let result = schema.set_field_id(1, "field-1");

	// Assert
	assert_eq!(
		result,
		Err(FormSchemaError::DuplicateFieldId("field-1".to_string()))
	);
}

#[rstest]
fn stale_update_is_a_no_op() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Text);
	let before = schema.clone();

	// Act - indices past the end are ignored
	schema.update_field(5, |field| field.required = true);
	schema.remove_field(5);
	schema.update_option(5, 0, |option| option.value = "x".to_string());
	schema.remove_option(0, 9);

	// Assert
	assert_eq!(schema, before);
}

// --- Decision Table: type changes and side-tables ---

#[rstest]
#[case(FieldType::Select, FieldType::Text, 0, true)]
#[case(FieldType::Select, FieldType::Radio, 2, true)]
#[case(FieldType::Checkbox, FieldType::Number, 0, false)]
fn change_field_type_clears_stale_options(
	#[case] from: FieldType,
	#[case] to: FieldType,
	#[case] expected_options: usize,
	#[case] expected_unbounded: bool,
) {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(from);
	schema.add_option(0).unwrap();
	schema.add_option(0).unwrap();

	// Act
	schema.change_field_type(0, to);
	if to.is_numeric() {
		schema.update_field(0, |field| field.bounds.min = Some(1.0));
	}

	// Assert
	let field = &schema.fields()[0];
	assert_eq!(field.field_type, to);
	assert_eq!(field.options.len(), expected_options);
	assert_eq!(field.bounds.is_unbounded(), expected_unbounded);
}

#[rstest]
fn change_away_from_number_clears_bounds() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Number);
	schema.update_field(0, |field| {
		field.bounds.min = Some(0.0);
		field.bounds.max = Some(120.0);
	});

	// Act
	schema.change_field_type(0, FieldType::Text);

	// Assert
	assert!(schema.fields()[0].bounds.is_unbounded());
}

// --- Sanity ---

#[rstest]
fn schema_round_trips_through_json() {
	// Arrange
	let mut schema = FormSchema::new();
	schema.add_field(FieldType::Select);
	schema.add_option(0).unwrap();
	schema.update_option(0, 0, |option| option.value = "yes".to_string());
	schema.add_field(FieldType::Number);
	schema.update_field(1, |field| field.bounds.max = Some(10.0));
	schema.submit_text = LocalizedText::from_parts("Send", "إرسال");
	schema.api_endpoint = "/api/contact".to_string();

	// Act
	let json = serde_json::to_string(&schema).unwrap();
	let back: FormSchema = serde_json::from_str(&json).unwrap();

	// Assert
	assert_eq!(back, schema);
}
