//! The in-memory address book.

use crate::domain::Weekday;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Default number of days ahead of today considered "upcoming".
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// A typed mapping from contact name to [`Record`].
///
/// Names are unique; adding a record under an existing name is an upsert
/// that discards the earlier record wholesale. Listing walks records in
/// insertion order. Built once at process start, never persisted.
#[derive(Debug, Default)]
pub struct AddressBook {
    // Small books only; lookups are linear scans over insertion order
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any existing record with
    /// the same name (last-write-wins, not a merge).
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => {
                debug!(name = record.name(), "replacing existing record");
                *existing = record;
            }
            None => {
                debug!(name = record.name(), "adding new record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Whether a record exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `[today, today + horizon_days]`,
    /// bucketed by the weekday the greeting should go out.
    ///
    /// Each birthday is re-anchored to `today`'s year for the comparison;
    /// the year is never advanced, so a January birthday checked in late
    /// December is not reported. Weekend occurrences are bucketed under
    /// Monday. Buckets come back sorted alphabetically by label, names in
    /// the order their records were encountered. Pure query, no side
    /// effects on the book.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> BTreeMap<&'static str, Vec<String>> {
        let window_end = today + Duration::days(i64::from(horizon_days));
        let mut buckets: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            // Feb 29 yields no occurrence in non-leap years and is skipped
            let Some(occurrence) = birthday.occurrence_in(today.year()) else {
                continue;
            };
            if occurrence < today || occurrence > window_end {
                continue;
            }

            let label = Weekday::from(occurrence.weekday()).notify_day().label();
            buckets
                .entry(label)
                .or_default()
                .push(record.name().to_string());
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        Record::new(name, Some(birthday)).unwrap()
    }

    /// 2024-06-10 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_add_record_and_get() {
        let mut book = AddressBook::new();
        let mut rec = Record::new("alice", None).unwrap();
        rec.add_phone("1234567890").unwrap();
        book.add_record(rec);

        assert!(book.contains("alice"));
        assert!(!book.contains("bob"));
        assert_eq!(book.get("alice").unwrap().phones()[0].as_str(), "1234567890");
        assert!(book.get("bob").is_none());
    }

    #[test]
    fn test_add_record_same_name_overwrites() {
        let mut book = AddressBook::new();

        let mut first = Record::new("bob", None).unwrap();
        first.add_phone("0001112223").unwrap();
        book.add_record(first);

        let mut second = Record::new("bob", None).unwrap();
        second.add_phone("0009998887").unwrap();
        book.add_record(second);

        assert_eq!(book.len(), 1);
        let phones: Vec<_> = book
            .get("bob")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        // Earlier record's phones are gone, not merged
        assert_eq!(phones, ["0009998887"]);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("charlie", None).unwrap());
        book.add_record(Record::new("alice", None).unwrap());
        book.add_record(Record::new("bob", None).unwrap());

        let names: Vec<_> = book.iter().map(Record::name).collect();
        assert_eq!(names, ["charlie", "alice", "bob"]);
    }

    #[test]
    fn test_upcoming_weekend_birthday_buckets_under_monday() {
        let mut book = AddressBook::new();
        // 1990-06-15: June 15 2024 is a Saturday
        book.add_record(record_with_birthday("alice", "1990-06-15"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets["Monday"], ["alice".to_string()]);
        assert!(!buckets.contains_key("Saturday"));
    }

    #[test]
    fn test_upcoming_excludes_past_horizon() {
        let mut book = AddressBook::new();
        // June 20 is past June 17, the inclusive end of the 7-day window
        book.add_record(record_with_birthday("bob", "2024-06-20"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_upcoming_window_is_closed_interval() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("today", "1980-06-10"));
        book.add_record(record_with_birthday("last-day", "1980-06-17"));
        book.add_record(record_with_birthday("yesterday", "1980-06-09"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        let names: Vec<_> = buckets.values().flatten().cloned().collect();
        assert!(names.contains(&"today".to_string()));
        assert!(names.contains(&"last-day".to_string()));
        assert!(!names.contains(&"yesterday".to_string()));
    }

    #[test]
    fn test_upcoming_does_not_wrap_year() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("newyear", "1990-01-01"));

        // Dec 28: Jan 1 of next year is within 7 days, but the year is
        // never advanced, so nothing qualifies
        let late_december = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let buckets = book.upcoming_birthdays(late_december, DEFAULT_HORIZON_DAYS);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_upcoming_skips_records_without_birthday() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("nobday", None).unwrap());
        book.add_record(record_with_birthday("alice", "1990-06-12"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        let names: Vec<_> = buckets.values().flatten().cloned().collect();
        assert_eq!(names, ["alice".to_string()]);
    }

    #[test]
    fn test_upcoming_leap_day_skipped_in_non_leap_year() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("leapling", "2000-02-29"));

        // 2023 is not a leap year; the occurrence simply does not exist
        let today = NaiveDate::from_ymd_opt(2023, 2, 27).unwrap();
        let buckets = book.upcoming_birthdays(today, DEFAULT_HORIZON_DAYS);
        assert!(buckets.is_empty());

        // 2024 is a leap year and Feb 29 falls inside the window
        let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let buckets = book.upcoming_birthdays(today, DEFAULT_HORIZON_DAYS);
        assert_eq!(buckets.values().flatten().count(), 1);
    }

    #[test]
    fn test_upcoming_names_keep_encounter_order_within_bucket() {
        let mut book = AddressBook::new();
        // Both June 15 2024, a Saturday, so both land under Monday
        book.add_record(record_with_birthday("zoe", "1985-06-15"));
        book.add_record(record_with_birthday("adam", "1991-06-15"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        assert_eq!(buckets["Monday"], ["zoe".to_string(), "adam".to_string()]);
    }

    #[test]
    fn test_upcoming_buckets_sort_alphabetically_by_label() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("wed", "1990-06-12"));
        book.add_record(record_with_birthday("tue", "1990-06-11"));
        book.add_record(record_with_birthday("fri", "1990-06-14"));

        let buckets = book.upcoming_birthdays(monday(), DEFAULT_HORIZON_DAYS);
        let labels: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(labels, ["Friday", "Tuesday", "Wednesday"]);
    }
}
