//! Day-off and compensation entries that replace the expected minutes.

use chrono::NaiveDate;
use uuid::Uuid;

use ponto_domain::{DayAdjustment, Period, Roster};

use crate::error::CoreError;

/// Applies and removes per-date adjustments.
pub struct AdjustmentService;

impl AdjustmentService {
    /// Upserts the adjustment for (employee, date); a second apply on the
    /// same date replaces the first.
    pub fn apply(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
        adjustment: DayAdjustment,
    ) -> Result<(), CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        roster.upsert_adjustment(employee_id, date, adjustment);
        Ok(())
    }

    pub fn remove(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        if roster.remove_adjustment(employee_id, date) {
            Ok(())
        } else {
            Err(CoreError::AdjustmentNotFound(date))
        }
    }

    /// Adjustments inside the period, newest first.
    pub fn list_in_period(
        roster: &Roster,
        employee_id: Uuid,
        period: Period,
    ) -> Result<Vec<(NaiveDate, DayAdjustment)>, CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        let mut entries: Vec<_> = roster
            .adjustments
            .get(&employee_id)
            .into_iter()
            .flatten()
            .filter(|(date, _)| period.contains(**date))
            .map(|(date, adjustment)| (*date, adjustment.clone()))
            .collect();
        entries.reverse();
        Ok(entries)
    }

    fn ensure_employee(roster: &Roster, employee_id: Uuid) -> Result<(), CoreError> {
        roster
            .employee(employee_id)
            .map(|_| ())
            .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponto_domain::{AdjustmentKind, Employee};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster_with_employee() -> (Roster, Uuid) {
        let mut roster = Roster::new("Test");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);
        (roster, id)
    }

    #[test]
    fn apply_replaces_an_existing_adjustment() {
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);
        AdjustmentService::apply(&mut roster, id, day, DayAdjustment::new(AdjustmentKind::Folga))
            .unwrap();
        AdjustmentService::apply(
            &mut roster,
            id,
            day,
            DayAdjustment::new(AdjustmentKind::Ajuste { minutes: 120 }),
        )
        .unwrap();

        assert_eq!(roster.adjustment_count(), 1);
        assert_eq!(
            roster.adjustment(id, day).unwrap().expected_minutes(),
            120
        );
    }

    #[test]
    fn list_is_filtered_to_the_period_and_descending() {
        let (mut roster, id) = roster_with_employee();
        for day in [date(2024, 6, 1), date(2024, 6, 10), date(2024, 7, 1)] {
            AdjustmentService::apply(
                &mut roster,
                id,
                day,
                DayAdjustment::new(AdjustmentKind::Ferias),
            )
            .unwrap();
        }

        let period = Period::new(date(2024, 6, 1), date(2024, 6, 30));
        let entries = AdjustmentService::list_in_period(&roster, id, period).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, date(2024, 6, 10));
        assert_eq!(entries[1].0, date(2024, 6, 1));
    }

    #[test]
    fn removing_a_missing_adjustment_is_an_error() {
        let (mut roster, id) = roster_with_employee();
        let err = AdjustmentService::remove(&mut roster, id, date(2024, 6, 3))
            .expect_err("nothing to remove");
        assert!(matches!(err, CoreError::AdjustmentNotFound(_)));
    }
}
