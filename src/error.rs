//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! All of these are recoverable: the command layer converts each into a
//! one-line message instead of letting it terminate the session.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a command against the address book.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A phone or birthday failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone targeted by an edit does not exist on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record exists under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Wrong argument count or order for a command
    #[error("Invalid arguments. Usage: {0}")]
    InvalidArguments(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
