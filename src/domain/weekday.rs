//! Weekday type with fixed English labels.
//!
//! The birthday report buckets contacts by weekday name and notifies
//! weekend birthdays on Monday. Labels are a fixed canonical set,
//! independent of any locale setting, so that rule stays deterministic
//! across environments.

/// A day of the week with a fixed English label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The fixed display label for this day.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// The day a birthday on this day is announced: weekend birthdays
    /// roll forward to Monday, weekdays stay where they are.
    pub fn notify_day(&self) -> Weekday {
        match self {
            Weekday::Saturday | Weekday::Sunday => Weekday::Monday,
            other => *other,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
