//! The balance engine: expected vs worked minutes per day and per period.

use chrono::NaiveDate;
use uuid::Uuid;

use ponto_domain::{
    Balance, DayBalance, DayRecord, Employee, Period, PeriodBalance, Roster, Weekday,
};

use crate::error::CoreError;

/// Pure, deterministic conversion of roster data into time summaries.
///
/// An adjustment for a date always wins over the weekly schedule; working on
/// a day with 0 expected minutes turns straight into positive saldo.
pub struct BalanceService;

impl BalanceService {
    /// Expected minutes for (employee, date): the adjustment's value when one
    /// exists, otherwise the weekly schedule for the date's weekday.
    pub fn expected_minutes(roster: &Roster, employee: &Employee, date: NaiveDate) -> i64 {
        if let Some(adjustment) = roster.adjustment(employee.id, date) {
            return adjustment.expected_minutes();
        }
        employee.schedule.expected_minutes(Weekday::from_date(date))
    }

    /// Worked minutes for an optional record; a day with no record is 0.
    pub fn worked_minutes(record: Option<&DayRecord>) -> i64 {
        record.map(DayRecord::worked_minutes).unwrap_or(0)
    }

    /// Fully resolved view of one day of an employee's timesheet.
    pub fn day_balance(roster: &Roster, employee: &Employee, date: NaiveDate) -> DayBalance {
        let record = roster.record(employee.id, date);
        let expected = Self::expected_minutes(roster, employee, date);
        let worked = Self::worked_minutes(record);
        DayBalance {
            date,
            weekday: Weekday::from_date(date),
            expected,
            worked,
            saldo: worked - expected,
            adjustment: roster.adjustment(employee.id, date).cloned(),
            record: record.cloned(),
        }
    }

    /// Folds expected and worked minutes over every day of the period.
    ///
    /// An empty period (`to < from`) yields an all-zero balance.
    pub fn range_balance(
        roster: &Roster,
        employee_id: Uuid,
        period: Period,
    ) -> Result<Balance, CoreError> {
        let employee = roster
            .employee(employee_id)
            .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))?;

        let mut expected = 0;
        let mut worked = 0;
        let mut days_off = 0;
        for date in period.days() {
            if roster.adjustment(employee_id, date).is_some() {
                days_off += 1;
            }
            expected += Self::expected_minutes(roster, employee, date);
            worked += Self::worked_minutes(roster.record(employee_id, date));
        }
        Ok(Balance::from_parts(expected, worked, days_off))
    }

    /// [`Self::range_balance`] paired with the window it covers.
    pub fn period_summary(
        roster: &Roster,
        employee_id: Uuid,
        period: Period,
    ) -> Result<PeriodBalance, CoreError> {
        Ok(PeriodBalance {
            period,
            totals: Self::range_balance(roster, employee_id, period)?,
        })
    }

    /// One [`DayBalance`] per day of the period, ascending.
    pub fn day_rows(
        roster: &Roster,
        employee_id: Uuid,
        period: Period,
    ) -> Result<Vec<DayBalance>, CoreError> {
        let employee = roster
            .employee(employee_id)
            .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))?;
        Ok(period
            .days()
            .map(|date| Self::day_balance(roster, employee, date))
            .collect())
    }

    /// Period balances for the whole registry, in roster order.
    pub fn roster_balances(roster: &Roster, period: Period) -> Vec<(Uuid, Balance)> {
        roster
            .employees
            .iter()
            .map(|employee| {
                let balance = Self::range_balance(roster, employee.id, period)
                    .unwrap_or_default();
                (employee.id, balance)
            })
            .collect()
    }
}
