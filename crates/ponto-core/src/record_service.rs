//! Admin corrections to daily punch records.

use chrono::NaiveDate;
use uuid::Uuid;

use ponto_domain::{PunchSlot, Roster};

use crate::error::CoreError;

/// Direct edits to punch records, bypassing the punch state machine.
///
/// Times are stored exactly as typed; text that is not valid `HH:MM` still
/// lands in the slot and simply contributes nothing to calculations.
pub struct RecordService;

impl RecordService {
    /// Writes `text` into one slot of (employee, date). Blank input clears
    /// the slot; clearing the last field drops the whole record.
    pub fn set_time(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
        slot: PunchSlot,
        text: &str,
    ) -> Result<(), CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        let record = roster.record_mut(employee_id, date);
        record.set_slot(slot, Some(text.to_string()));
        Self::drop_if_empty(roster, employee_id, date);
        roster.touch();
        Ok(())
    }

    /// Replaces the free-text note; blank input removes it.
    pub fn set_note(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
        text: &str,
    ) -> Result<(), CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        let record = roster.record_mut(employee_id, date);
        let trimmed = text.trim();
        record.note = (!trimmed.is_empty()).then(|| trimmed.to_string());
        Self::drop_if_empty(roster, employee_id, date);
        roster.touch();
        Ok(())
    }

    /// Deletes the record for (employee, date).
    pub fn remove_record(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        Self::ensure_employee(roster, employee_id)?;
        if roster.remove_record(employee_id, date) {
            Ok(())
        } else {
            Err(CoreError::RecordNotFound(date))
        }
    }

    fn ensure_employee(roster: &Roster, employee_id: Uuid) -> Result<(), CoreError> {
        roster
            .employee(employee_id)
            .map(|_| ())
            .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))
    }

    fn drop_if_empty(roster: &mut Roster, employee_id: Uuid, date: NaiveDate) {
        let empty = roster
            .record(employee_id, date)
            .map(|record| record.is_empty())
            .unwrap_or(false);
        if empty {
            roster.remove_record(employee_id, date);
        }
    }
}
