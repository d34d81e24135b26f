//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{EditPhoneError, NotFoundError, ValidationError};
use thiserror::Error;

/// Errors a command handler can fail with.
///
/// None of these reach the input loop: [`crate::handlers::input_error`]
/// turns each one into the line the user sees, see [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A phone or record referenced by value does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The named contact is not in the address book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Wrong number of arguments, with the usage hint to show
    #[error("{0}")]
    InvalidArguments(&'static str),

    /// Arguments missing or malformed, no specific hint
    #[error("Malformed command arguments")]
    MalformedInput,
}

impl From<EditPhoneError> for CommandError {
    fn from(e: EditPhoneError) -> Self {
        match e {
            EditPhoneError::NotFound(e) => Self::NotFound(e),
            EditPhoneError::Invalid(e) => Self::Validation(e),
        }
    }
}

impl CommandError {
    /// The fixed text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound(e) => e.to_string(),
            Self::ContactNotFound(_) => "Contact not found.".to_string(),
            Self::InvalidArguments(hint) => (*hint).to_string(),
            Self::MalformedInput => "Enter the required information correctly.".to_string(),
        }
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
