//! Behavioural tests for the contact command handlers.
//!
//! These tests drive the public handlers the same way the input loop does:
//! an argument list plus the shared address book in, one reply string out.

use assistant_bot::handlers::{
    add_contact, change_contact, delete_contact, show_all, show_phone,
};
use assistant_bot::{AddressBook, NotFoundError};

fn book_with(contacts: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone) in contacts {
        add_contact(&[*name, *phone], &mut book);
    }
    book
}

#[test]
fn test_add_contact_without_args() {
    let mut book = AddressBook::new();
    assert_eq!(
        add_contact(&[], &mut book),
        "Please provide a name and a phone number."
    );
}

#[test]
fn test_add_contact_stores_record() {
    let mut book = AddressBook::new();
    assert_eq!(add_contact(&["Al", "1234567890"], &mut book), "Contact Al added.");

    let record = book.find("Al").expect("Al should be stored");
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "1234567890");
}

/// Adding an existing name replaces the whole record, old phones included.
#[test]
fn test_add_contact_overwrites_existing() {
    let mut book = book_with(&[("Al", "1111111111")]);
    add_contact(&["Al", "2222222222"], &mut book);

    assert_eq!(
        show_phone(&["Al"], &book),
        "Contact name: Al, phones: 2222222222"
    );
}

#[test]
fn test_change_contact_replaces_phone() {
    let mut book = book_with(&[("Al", "1111111111")]);
    assert_eq!(
        change_contact(&["Al", "9999999999"], &mut book),
        "Contact Al updated."
    );

    let record = book.find("Al").unwrap();
    assert_eq!(record.find_phone("9999999999").unwrap().as_str(), "9999999999");
    assert_eq!(
        record.find_phone("1111111111").unwrap_err(),
        NotFoundError::Phone("1111111111".to_string())
    );
}

#[test]
fn test_change_unknown_contact() {
    let mut book = AddressBook::new();
    assert_eq!(
        change_contact(&["Nobody", "9999999999"], &mut book),
        "Contact not found."
    );
    assert!(book.is_empty());
}

#[test]
fn test_show_phone_unknown_contact() {
    let book = AddressBook::new();
    assert_eq!(show_phone(&["Nobody"], &book), "Contact not found.");
}

#[test]
fn test_show_all_empty() {
    let book = AddressBook::new();
    assert_eq!(show_all(&book), "No contacts available.");
}

#[test]
fn test_show_all_two_contacts() {
    let mut book = book_with(&[("Al", "1111111111"), ("Bo", "2222222222")]);
    book.find_mut("Al").unwrap().add_phone("3333333333").unwrap();

    let output = show_all(&book);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Contacts list:",
            "Contact name: Al, phones: 1111111111; 3333333333",
            "Contact name: Bo, phones: 2222222222",
        ]
    );
}

#[test]
fn test_delete_contact() {
    let mut book = book_with(&[("Al", "1111111111")]);

    assert_eq!(delete_contact(&["Nobody"], &mut book), "Record not found.");
    assert_eq!(delete_contact(&["Al"], &mut book), "Contact Al deleted.");
    assert!(book.find("Al").is_none());
    assert_eq!(delete_contact(&["Al"], &mut book), "Record not found.");
}

#[test]
fn test_names_are_case_sensitive() {
    let book = book_with(&[("Al", "1111111111")]);
    assert_eq!(show_phone(&["al"], &book), "Contact not found.");
}
