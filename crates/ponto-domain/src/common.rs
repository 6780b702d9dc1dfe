//! Shared traits and the weekday primitive the schedules are keyed on.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the roster.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Days of the week, Sunday first, as the schedules key them.
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

/// Sunday-first order, matching the schedule editor layout.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl Weekday {
    /// Derives the weekday of a calendar date (proleptic Gregorian).
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Weekday::Sun,
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
        }
    }

    /// Short Portuguese label used in tables and CSV rows.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sun => "Dom",
            Weekday::Mon => "Seg",
            Weekday::Tue => "Ter",
            Weekday::Wed => "Qua",
            Weekday::Thu => "Qui",
            Weekday::Fri => "Sex",
            Weekday::Sat => "Sáb",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
