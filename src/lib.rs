//! Contact Assistant - an interactive command-line contact manager.
//!
//! Stores named records, each with one or more phone numbers and an
//! optional birthday, and answers line-oriented commands to add, update,
//! list, and query contacts, including a weekly birthday reminder report.
//! Everything lives in memory for the lifetime of the session.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone, birthday, weekday labels)
//! - **models**: the contact record and the address book that owns them
//! - **commands**: one handler per command, returning display text
//! - **repl**: the interactive prompt loop and command dispatch
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use config::Config;
pub use domain::{Birthday, Phone, ValidationError, Weekday};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use repl::Outcome;
