//! Record model: one contact in the address book.

use crate::domain::{EditPhoneError, Name, NotFoundError, Phone, ValidationError};
use serde::Serialize;
use std::fmt;

/// A single contact: a validated name and its phones in insertion order.
///
/// Phones are not deduplicated, the same number may be stored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), NotFoundError> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`; the new phone goes to the end of the list.
    ///
    /// Both phones are checked before anything is removed, so a failed edit
    /// leaves the record untouched. A missing `old` is reported even when
    /// `new` is also invalid.
    ///
    /// # Errors
    ///
    /// - `EditPhoneError::NotFound` if `old` is not stored on this record.
    /// - `EditPhoneError::Invalid` if `new` is not a valid phone.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> Result<(), EditPhoneError> {
        let index = self.position(old)?;
        let new = Phone::new(new)?;
        self.phones.remove(index);
        self.phones.push(new);
        Ok(())
    }

    /// Find a stored phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Result<&Phone, NotFoundError> {
        self.position(phone).map(|index| &self.phones[index])
    }

    fn position(&self, phone: &str) -> Result<usize, NotFoundError> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| NotFoundError::Phone(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new("Al").unwrap();
        assert_eq!(record.name().as_str(), "Al");
        assert!(record.phones().is_empty());
        assert!(record.first_phone().is_none());
    }

    #[test]
    fn test_new_record_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with("Al", &["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_invalid_phone_fails() {
        let mut record = Record::new("Al").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number. Must be 10 digits.");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record_with("Al", &["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_missing_phone_fails() {
        let mut record = record_with("Al", &["1111111111"]);
        let err = record.remove_phone("2222222222").unwrap_err();
        assert_eq!(err, NotFoundError::Phone("2222222222".to_string()));
        assert_eq!(err.to_string(), "Phone not found.");
    }

    #[test]
    fn test_edit_phone_replaces_value() {
        let mut record = record_with("Al", &["1111111111"]);
        record.edit_phone("1111111111", "9999999999").unwrap();
        assert!(record.find_phone("9999999999").is_ok());
        assert!(record.find_phone("1111111111").is_err());
    }

    #[test]
    fn test_edit_phone_appends_new_value() {
        let mut record = record_with("Al", &["1111111111", "2222222222"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_old_adds_nothing() {
        let mut record = record_with("Al", &["1111111111"]);
        let err = record.edit_phone("5555555555", "9999999999").unwrap_err();
        assert_eq!(
            err,
            EditPhoneError::NotFound(NotFoundError::Phone("5555555555".to_string()))
        );
        assert_eq!(record.phones().len(), 1);
        assert!(record.find_phone("9999999999").is_err());
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = record_with("Al", &["1111111111"]);
        let err = record.edit_phone("1111111111", "bad").unwrap_err();
        assert!(matches!(err, EditPhoneError::Invalid(_)));
        assert!(record.find_phone("1111111111").is_ok());
    }

    #[test]
    fn test_edit_phone_missing_old_wins_over_invalid_new() {
        let mut record = record_with("Al", &["1111111111"]);
        let err = record.edit_phone("5555555555", "bad").unwrap_err();
        assert_eq!(
            err,
            EditPhoneError::NotFound(NotFoundError::Phone("5555555555".to_string()))
        );
        assert_eq!(err.to_string(), "Phone not found.");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_display() {
        let record = record_with("Al", &["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Al, phones: 1111111111; 2222222222"
        );
        assert_eq!(
            Record::new("Bo").unwrap().to_string(),
            "Contact name: Bo, phones: "
        );
    }

    #[test]
    fn test_serialization() {
        let record = record_with("Al", &["1111111111"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Al","phones":["1111111111"]}"#);
    }
}
