//! Derived worked-vs-expected totals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adjustment::DayAdjustment;
use crate::common::Weekday;
use crate::period::Period;
use crate::record::DayRecord;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Aggregated totals for one employee over a period.
pub struct Balance {
    pub expected: i64,
    pub worked: i64,
    pub saldo: i64,
    pub days_off: usize,
}

impl Balance {
    pub fn from_parts(expected: i64, worked: i64, days_off: usize) -> Self {
        Self {
            expected,
            worked,
            saldo: worked - expected,
            days_off,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        match self.saldo {
            s if s > 0 => BalanceStatus::Credit,
            s if s < 0 => BalanceStatus::Deficit,
            _ => BalanceStatus::Even,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Which side of zero the saldo sits on.
pub enum BalanceStatus {
    /// Hours owed to the employee.
    Credit,
    /// Hours the employee owes.
    Deficit,
    Even,
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BalanceStatus::Credit => "A haver",
            BalanceStatus::Deficit => "A dever",
            BalanceStatus::Even => "Zerado",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One day of an employee's timesheet, fully resolved.
pub struct DayBalance {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub expected: i64,
    pub worked: i64,
    pub saldo: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<DayAdjustment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<DayRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A period balance together with the window it covers.
pub struct PeriodBalance {
    pub period: Period,
    pub totals: Balance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saldo_is_worked_minus_expected() {
        let balance = Balance::from_parts(480, 300, 0);
        assert_eq!(balance.saldo, -180);
        assert_eq!(balance.status(), BalanceStatus::Deficit);
    }

    #[test]
    fn zero_and_credit_statuses() {
        assert_eq!(Balance::from_parts(0, 0, 0).status(), BalanceStatus::Even);
        assert_eq!(Balance::from_parts(0, 240, 1).status(), BalanceStatus::Credit);
    }
}
