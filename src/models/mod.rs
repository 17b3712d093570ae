//! Data models for the contact assistant.
//!
//! This module contains the data structures representing contacts and the
//! in-memory address book that owns them.

pub mod book;
pub mod record;

pub use book::{AddressBook, DEFAULT_HORIZON_DAYS};
pub use record::Record;
