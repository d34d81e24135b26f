//! Command handlers for the assistant bot.
//!
//! Each public handler takes the parsed argument list and the address book
//! and always returns the line to print. Failures are translated by
//! [`input_error`], so nothing a handler does can end the session.

use crate::domain::NotFoundError;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, warn};

/// Convert a handler result into the text shown to the user.
pub fn input_error(result: CommandResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "Command failed");
            e.user_message()
        }
    }
}

/// `hello`
pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create a contact, replacing any with the same name.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> String {
    input_error(try_add_contact(args, book))
}

/// `change <name> <new_phone>`: replace the contact's first phone.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> String {
    input_error(try_change_contact(args, book))
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> String {
    input_error(try_show_phone(args, book))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts available.".to_string();
    }

    let mut lines = Vec::with_capacity(book.len() + 1);
    lines.push("Contacts list:".to_string());
    lines.extend(book.iter().map(|(_, record)| record.to_string()));
    lines.join("\n")
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> String {
    input_error(try_delete_contact(args, book))
}

fn try_add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::InvalidArguments(
            "Please provide a name and a phone number.",
        ));
    };

    let mut record = Record::new(*name)?;
    record.add_phone(*phone)?;

    if book.find(name).is_some() {
        debug!(name = %name, "Overwriting existing contact");
    }
    book.add_record(record);

    Ok(format!("Contact {} added.", name))
}

fn try_change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone] = args else {
        return Err(CommandError::InvalidArguments(
            "Please provide a name and the new phone number.",
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    // A contact with no phones has nothing to replace.
    let Some(old_phone) = record.first_phone().map(|p| p.as_str().to_string()) else {
        warn!(name = %name, "Contact has no phone to replace");
        return Err(NotFoundError::Phone(String::new()).into());
    };

    record.edit_phone(&old_phone, *new_phone)?;
    debug!(name = %name, old = %old_phone, new = %new_phone, "Phone replaced");

    Ok(format!("Contact {} updated.", name))
}

fn try_show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MalformedInput);
    };

    book.find(name)
        .map(Record::to_string)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn try_delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::InvalidArguments("Please provide a name."));
    };

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}
