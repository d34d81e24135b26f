//! Assistant Bot - an interactive address book driven by text commands.
//!
//! Contacts live in memory for the length of one session. Each input line is a
//! command word followed by arguments; every command produces one reply line
//! (or block) and failures are reported as text, never by ending the session.
//!
//! # Architecture
//!
//! - **domain**: Validated `Name` and `Phone` value objects and their errors
//! - **models**: `Record` (a contact) and `AddressBook` (records by name)
//! - **handlers**: One function per command, with uniform error-to-text translation
//! - **repl**: Line parsing, command dispatch and the session loop
//! - **error**: Crate error types
//! - **config**: Logging configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repl;

pub use config::Config;
pub use domain::{EditPhoneError, Name, NotFoundError, Phone, ValidationError};
pub use error::{CommandError, CommandResult};
pub use models::{AddressBook, Record};
pub use repl::{Command, Outcome, Session};
