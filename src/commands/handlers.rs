//! Command handlers.
//!
//! Each handler takes already-tokenized arguments plus the address book,
//! performs one logical operation, and returns the text to display. Errors
//! never escape further than the dispatch layer, which renders them as
//! one-line messages.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::debug;

const ADD_USAGE: &str = "add <name> <phone> [birthday]";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const PHONE_USAGE: &str = "phone <name>";

/// `add <name> <phone> [birthday]` — upsert a contact by name.
///
/// A fresh record is built and stored under the name; re-adding an
/// existing name replaces the old record wholesale, earlier phones
/// included.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let (name, phone, birthday) = match args {
        [name, phone] => (*name, *phone, None),
        [name, phone, birthday] => (*name, *phone, Some(*birthday)),
        _ => return Err(CommandError::InvalidArguments(ADD_USAGE)),
    };

    let mut record = Record::new(name, birthday)?;
    record.add_phone(phone)?;
    book.add_record(record);

    debug!(name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>` — replace one phone on a contact.
pub fn change_phone(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::InvalidArguments(CHANGE_USAGE));
    };

    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    debug!(name, "contact updated");
    Ok("Contact updated.".to_string())
}

/// `phone <name>` — show a contact's phone numbers.
pub fn show_phone(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::InvalidArguments(PHONE_USAGE));
    };

    let record = book
        .get(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}: {}", record.name(), phones))
}

/// `all` — one line per contact, in the order they were added.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `birthdays` — who to congratulate in the coming window, one line per
/// notify day, sorted by weekday label.
pub fn birthdays(book: &AddressBook, today: NaiveDate, horizon_days: u32) -> String {
    let buckets = book.upcoming_birthdays(today, horizon_days);
    if buckets.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    buckets
        .iter()
        .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
