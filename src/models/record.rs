//! Record model representing one contact.

use crate::domain::{Birthday, Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is the record's identity and never changes after creation.
/// Phones keep insertion order, which is also display order; duplicates
/// are allowed until explicitly removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// If `birthday` is given it must be a valid `YYYY-MM-DD` date or
    /// construction fails with `ValidationError::InvalidBirthday`.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let birthday = birthday.map(Birthday::parse).transpose()?;
        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// On validation failure the list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`.
    ///
    /// Removing a value that is not present is a silent no-op, not an
    /// error (filter semantics).
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// Later duplicates of `old` are left untouched. If no phone matches,
    /// fails with `PhoneNotFound`; the new value is only validated once a
    /// match has been located, so a miss surfaces even when `new` is also
    /// malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;

        self.phones[position] = Phone::new(new)?;
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any prior value.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

// One-line summary used by the `all` and `phone` commands
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
