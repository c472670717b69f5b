use contactbook_core::{Contact, CoreError};
use contactbook_directory::{ContactUpdate, Directory, DirectoryError, DirectoryErrorKind};

fn contact(id: &str, first: &str, last: &str, phone: &str, address: &str) -> Contact {
    Contact::new(id, first, last, phone, address).expect("valid contact")
}

#[test]
fn add_then_get_returns_equal_contact() {
    let mut directory = Directory::new();
    let added = contact("201", "James", "Anderson", "1234567890", "789 Sunset Blvd");
    directory.add(added.clone()).expect("add contact");

    let fetched = directory.get("201").expect("contact exists");
    assert_eq!(fetched, &added);
    assert_eq!(directory.len(), 1);
}

#[test]
fn duplicate_id_is_rejected_and_original_kept() {
    let mut directory = Directory::new();
    let original = contact("202", "Emily", "Carter", "9876543210", "456 Maple Street");
    directory.add(original.clone()).expect("add contact");

    let impostor = contact("202", "Mallory", "Evans", "1111111111", "1 Fake Rd");
    let err = directory.add(impostor).unwrap_err();
    assert_eq!(err.kind(), DirectoryErrorKind::DuplicateId);
    assert_eq!(err.to_string(), "a contact with this id already exists: 202");

    assert_eq!(directory.len(), 1);
    assert_eq!(directory.get("202"), Some(&original));
}

#[test]
fn delete_removes_contact() {
    let mut directory = Directory::new();
    directory
        .add(contact("203", "Sophia", "Johnson", "5554443333", "321 Birch Lane"))
        .expect("add contact");

    let removed = directory.delete("203").expect("delete contact");
    assert_eq!(removed.first_name(), "Sophia");
    assert!(directory.get("203").is_none());
    assert!(directory.is_empty());
}

#[test]
fn delete_unknown_id_fails_without_change() {
    let mut directory = Directory::new();
    let err = directory.delete("999").unwrap_err();
    assert_eq!(err.kind(), DirectoryErrorKind::NotFound);
    assert_eq!(err.to_string(), "cannot delete, contact not found: 999");

    directory
        .add(contact("1", "Ann", "Lee", "1234567890", "1 Way"))
        .expect("add contact");
    assert!(directory.delete("999").is_err());
    assert_eq!(directory.len(), 1);
}

#[test]
fn update_applies_all_supplied_fields() {
    let mut directory = Directory::new();
    directory
        .add(contact("204", "Liam", "Williams", "7778889999", "789 Cypress Ave"))
        .expect("add contact");

    directory
        .update(
            "204",
            ContactUpdate {
                first_name: Some("Liam".to_string()),
                last_name: Some("Brown".to_string()),
                phone: Some("8887776666".to_string()),
                address: Some("123 Oak Drive".to_string()),
            },
        )
        .expect("update contact");

    let updated = directory.get("204").expect("contact exists");
    assert_eq!(updated.first_name(), "Liam");
    assert_eq!(updated.last_name(), "Brown");
    assert_eq!(updated.phone(), "8887776666");
    assert_eq!(updated.address(), "123 Oak Drive");
}

#[test]
fn update_unknown_id_fails_and_creates_nothing() {
    let mut directory = Directory::new();
    let err = directory
        .update(
            "999",
            ContactUpdate {
                first_name: Some("Oliver".to_string()),
                last_name: Some("White".to_string()),
                phone: Some("9998887777".to_string()),
                address: Some("555 Elm Circle".to_string()),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        DirectoryError::NotFound {
            op: contactbook_directory::Operation::Update,
            id: "999".to_string(),
        }
    );
    assert_eq!(err.to_string(), "cannot update, contact not found: 999");
    assert!(directory.is_empty());
    assert!(!directory.contains("999"));
}

#[test]
fn update_phone_only_leaves_other_fields() {
    let mut directory = Directory::new();
    directory
        .add(contact("205", "Ava", "Miller", "1231231234", "  9 Harbor Rd "))
        .expect("add contact");

    let updated = directory
        .update(
            "205",
            ContactUpdate {
                phone: Some("3213214321".to_string()),
                ..Default::default()
            },
        )
        .expect("update contact");
    assert_eq!(updated.phone(), "3213214321");
    assert_eq!(updated.first_name(), "Ava");
    assert_eq!(updated.last_name(), "Miller");
    assert_eq!(updated.address(), "9 Harbor Rd");
}

#[test]
fn update_keeps_fields_applied_before_rejection() {
    let mut directory = Directory::new();
    directory
        .add(contact("206", "Noah", "Davis", "4445556666", "12 Elm St"))
        .expect("add contact");

    let err = directory
        .update(
            "206",
            ContactUpdate {
                first_name: Some("Mason".to_string()),
                last_name: Some("Garcia".to_string()),
                phone: Some("not-a-phone".to_string()),
                address: Some("77 Pine Ave".to_string()),
            },
        )
        .unwrap_err();
    assert_eq!(err, DirectoryError::Validation(CoreError::InvalidPhone));

    let current = directory.get("206").expect("contact exists");
    assert_eq!(current.first_name(), "Mason");
    assert_eq!(current.last_name(), "Garcia");
    assert_eq!(current.phone(), "4445556666");
    assert_eq!(current.address(), "12 Elm St");
}

#[test]
fn empty_update_changes_nothing() {
    let mut directory = Directory::new();
    let original = contact("207", "Mia", "Lopez", "1010101010", "3 Bay Ct");
    directory.add(original.clone()).expect("add contact");

    let updated = directory
        .update("207", ContactUpdate::default())
        .expect("update contact");
    assert_eq!(updated, &original);
}

#[test]
fn update_trims_address() {
    let mut directory = Directory::new();
    directory
        .add(contact("208", "Eli", "Moore", "2020202020", "4 Ridge Rd"))
        .expect("add contact");

    directory
        .update(
            "208",
            ContactUpdate {
                address: Some("   789 Oak Lane   ".to_string()),
                ..Default::default()
            },
        )
        .expect("update contact");
    assert_eq!(
        directory.get("208").map(Contact::address),
        Some("789 Oak Lane")
    );
}

#[test]
fn get_unknown_or_malformed_id_is_none() {
    let directory = Directory::new();
    assert!(directory.get("404").is_none());
    assert!(directory.get("").is_none());
    assert!(directory.get("far-too-long-id").is_none());
}
