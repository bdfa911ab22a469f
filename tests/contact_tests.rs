//! Tests for Contact
//!
//! These tests verify:
//! - Construction stamps ID and timestamps
//! - JSON encode/decode, including awkward field values
//! - Decode failures surface as MalformedRecord

use addrbook::{AddressBookError, Contact};

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_contact_sets_fields() {
    let contact = Contact::new("John", "Doe", "john@example.com", "1234567890", "123 Main St");

    assert_eq!(contact.first_name, "John");
    assert_eq!(contact.last_name, "Doe");
    assert_eq!(contact.email, "john@example.com");
    assert_eq!(contact.phone, "1234567890");
    assert_eq!(contact.address, "123 Main St");
    assert!(!contact.id().is_empty());
    assert_eq!(contact.created_at(), contact.updated_at());
}

#[test]
fn test_new_contact_allows_empty_fields() {
    let contact = Contact::new("", "", "", "", "");

    assert!(contact.first_name.is_empty());
    assert!(contact.address.is_empty());
    assert!(!contact.id().is_empty());
}

#[test]
fn test_id_prefix_matches_creation_second() {
    let contact = Contact::new("A", "B", "", "", "");

    let expected = contact.created_at().format("%Y%m%d%H%M%S").to_string();
    assert!(contact.id().starts_with(&expected));
}

#[test]
fn test_ids_are_unique() {
    let a = Contact::new("Same", "Name", "", "", "");
    let b = Contact::new("Same", "Name", "", "", "");

    assert_ne!(a.id(), b.id());
    assert_eq!(a.id().len(), b.id().len());
}

// =============================================================================
// JSON Tests
// =============================================================================

#[test]
fn test_json_round_trip() {
    let contact = Contact::new("Jane", "Smith", "jane@example.com", "0987654321", "456 Oak St");

    let json = contact.to_json().unwrap();
    let parsed = Contact::from_json(&json).unwrap();

    assert_eq!(parsed, contact);
}

#[test]
fn test_json_round_trip_awkward_values() {
    let contact = Contact::new(
        "",
        "O'Brien, \"Jr.\"",
        "a,b@example.com",
        "",
        "line one\nline two, apt \"3\"\r\n",
    );

    let parsed = Contact::from_json(&contact.to_json().unwrap()).unwrap();

    assert_eq!(parsed, contact);
}

#[test]
fn test_json_uses_camel_case_keys() {
    let contact = Contact::new("Jane", "Smith", "", "", "");
    let json = contact.to_json().unwrap();

    for key in ["\"id\"", "\"firstName\"", "\"lastName\"", "\"createdAt\"", "\"updatedAt\""] {
        assert!(json.contains(key), "missing {} in {}", key, json);
    }
}

#[test]
fn test_json_invalid_input() {
    let err = Contact::from_json("invalid json").unwrap_err();
    assert!(matches!(err, AddressBookError::MalformedRecord(_)));
}

#[test]
fn test_json_missing_field() {
    let json = r#"{"id":"x","firstName":"A","lastName":"B","email":"","phone":"",
        "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;

    let err = Contact::from_json(json).unwrap_err();
    assert!(matches!(err, AddressBookError::MalformedRecord(_)));
}

#[test]
fn test_json_bad_timestamp() {
    let json = r#"{"id":"x","firstName":"A","lastName":"B","email":"","phone":"","address":"",
        "createdAt":"01/01/2024","updatedAt":"2024-01-01T00:00:00Z"}"#;

    let err = Contact::from_json(json).unwrap_err();
    assert!(matches!(err, AddressBookError::MalformedRecord(_)));
}

#[test]
fn test_json_rejects_updated_before_created() {
    let json = r#"{"id":"x","firstName":"A","lastName":"B","email":"","phone":"","address":"",
        "createdAt":"2024-01-02T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;

    let err = Contact::from_json(json).unwrap_err();
    assert!(err.to_string().contains("precedes"));
}

#[test]
fn test_json_rejects_empty_id() {
    let json = r#"{"id":"","firstName":"A","lastName":"B","email":"","phone":"","address":"",
        "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;

    let err = Contact::from_json(json).unwrap_err();
    assert!(matches!(err, AddressBookError::MalformedRecord(_)));
}
