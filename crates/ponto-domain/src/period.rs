//! Inclusive date ranges for balance queries and exports.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// An inclusive `[from, to]` range of calendar days.
///
/// A range with `to < from` is not an error; it simply contains no days.
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Period {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// The `days_back`-day window ending at `to`, inclusive on both ends.
    pub fn ending_at(to: NaiveDate, days_back: u32) -> Self {
        Self {
            from: to - Duration::days(i64::from(days_back)),
            to,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Ascending day-by-day iteration; empty when `to < from`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} a {}", self.from, self.to)
    }
}
