//! Domain validation and lookup errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Invalid phone number. Must be 10 digits."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised when a record or phone referenced by value does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No phone with this value is stored on the record.
    Phone(String),

    /// No record with this name is stored in the address book.
    Record(String),
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone(_) => write!(f, "Phone not found."),
            Self::Record(_) => write!(f, "Record not found."),
        }
    }
}

impl std::error::Error for NotFoundError {}

/// Errors from replacing one phone with another on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPhoneError {
    /// The phone to replace is not stored on the record.
    NotFound(NotFoundError),

    /// The replacement phone is invalid.
    Invalid(ValidationError),
}

impl fmt::Display for EditPhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(e) => write!(f, "{}", e),
            Self::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EditPhoneError {}

impl From<NotFoundError> for EditPhoneError {
    fn from(e: NotFoundError) -> Self {
        Self::NotFound(e)
    }
}

impl From<ValidationError> for EditPhoneError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}
