//! PIN checks and the punch state machine.

use chrono::NaiveDate;
use uuid::Uuid;

use ponto_domain::{Employee, PunchPolicy, PunchSlot, Roster};

use crate::error::CoreError;

/// Note stamped onto records created by the punch action.
pub const PUNCH_NOTE: &str = "Batida via celular";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which slot a punch landed in, and the time it recorded.
pub struct PunchOutcome {
    pub slot: PunchSlot,
    pub time: String,
}

/// Drives the employee-facing punch flow.
///
/// Each day advances through in1 → out1 → in2 → out2; once all four slots are
/// filled the behavior of a further punch is the configured [`PunchPolicy`].
pub struct PunchService;

impl PunchService {
    /// Trimmed-equality PIN check. No lockout, no retry limit.
    pub fn verify_pin(employee: &Employee, pin: &str) -> Result<(), CoreError> {
        if pin.trim() == employee.pin.trim() {
            Ok(())
        } else {
            Err(CoreError::PinMismatch)
        }
    }

    /// Same check against the roster's admin PIN.
    pub fn verify_admin_pin(roster: &Roster, pin: &str) -> Result<(), CoreError> {
        if pin.trim() == roster.admin_pin.trim() {
            Ok(())
        } else {
            Err(CoreError::PinMismatch)
        }
    }

    /// Stamps `time` into the next free slot of (employee, date).
    ///
    /// On a complete day, `Reject` refuses with [`CoreError::DayComplete`]
    /// and `Overwrite` replaces the last out-time.
    pub fn punch(
        roster: &mut Roster,
        employee_id: Uuid,
        date: NaiveDate,
        time: &str,
        policy: PunchPolicy,
    ) -> Result<PunchOutcome, CoreError> {
        let employee = roster
            .employee(employee_id)
            .ok_or_else(|| CoreError::EmployeeNotFound(employee_id.to_string()))?;
        if !employee.active {
            return Err(CoreError::InvalidOperation(format!(
                "employee `{}` is deactivated",
                employee.name
            )));
        }

        let record = roster.record_mut(employee_id, date);
        let slot = match record.next_slot() {
            Some(slot) => slot,
            None => match policy {
                PunchPolicy::Reject => return Err(CoreError::DayComplete),
                PunchPolicy::Overwrite => PunchSlot::Out2,
            },
        };
        record.set_slot(slot, Some(time.to_string()));
        if record.note.is_none() {
            record.note = Some(PUNCH_NOTE.into());
        }
        roster.touch();
        Ok(PunchOutcome {
            slot,
            time: time.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn pin_check_trims_and_compares() {
        let employee = Employee::new("Maria");
        assert!(PunchService::verify_pin(&employee, " 1234 ").is_ok());
        assert!(matches!(
            PunchService::verify_pin(&employee, "0000"),
            Err(CoreError::PinMismatch)
        ));
    }

    #[test]
    fn punches_fill_slots_in_order() {
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);

        let times = ["08:00", "12:00", "13:00", "17:00"];
        let slots = [
            PunchSlot::In1,
            PunchSlot::Out1,
            PunchSlot::In2,
            PunchSlot::Out2,
        ];
        for (time, expected_slot) in times.iter().zip(slots) {
            let outcome =
                PunchService::punch(&mut roster, id, day, time, PunchPolicy::Reject).unwrap();
            assert_eq!(outcome.slot, expected_slot);
            assert_eq!(outcome.time, *time);
        }

        let record = roster.record(id, day).unwrap();
        assert!(record.is_complete());
        assert_eq!(record.note.as_deref(), Some(PUNCH_NOTE));
        assert_eq!(record.worked_minutes(), 480);
    }

    #[test]
    fn fifth_punch_is_rejected_under_the_default_policy() {
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);
        for time in ["08:00", "12:00", "13:00", "17:00"] {
            PunchService::punch(&mut roster, id, day, time, PunchPolicy::Reject).unwrap();
        }

        let err = PunchService::punch(&mut roster, id, day, "18:00", PunchPolicy::Reject)
            .expect_err("complete day must reject");
        assert!(matches!(err, CoreError::DayComplete));

        // The four slots are untouched by the rejected punch.
        let record = roster.record(id, day).unwrap();
        assert_eq!(record.in1.as_deref(), Some("08:00"));
        assert_eq!(record.out1.as_deref(), Some("12:00"));
        assert_eq!(record.in2.as_deref(), Some("13:00"));
        assert_eq!(record.out2.as_deref(), Some("17:00"));
    }

    #[test]
    fn fifth_punch_replaces_out2_under_overwrite() {
        // The two source variants of this app disagreed here; both behaviors
        // stay available behind the policy switch.
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);
        for time in ["08:00", "12:00", "13:00", "17:00"] {
            PunchService::punch(&mut roster, id, day, time, PunchPolicy::Overwrite).unwrap();
        }

        let outcome =
            PunchService::punch(&mut roster, id, day, "18:30", PunchPolicy::Overwrite).unwrap();
        assert_eq!(outcome.slot, PunchSlot::Out2);

        let record = roster.record(id, day).unwrap();
        assert_eq!(record.in1.as_deref(), Some("08:00"));
        assert_eq!(record.out1.as_deref(), Some("12:00"));
        assert_eq!(record.in2.as_deref(), Some("13:00"));
        assert_eq!(record.out2.as_deref(), Some("18:30"));
    }

    #[test]
    fn deactivated_employee_cannot_punch() {
        let (mut roster, id) = roster_with_employee();
        roster.employee_mut(id).unwrap().active = false;
        let err = PunchService::punch(&mut roster, id, date(2024, 6, 3), "08:00", PunchPolicy::Reject)
            .expect_err("inactive employee must fail");
        assert!(matches!(err, CoreError::InvalidOperation(_)));
    }

    #[test]
    fn punch_after_admin_cleared_a_slot_fills_the_gap() {
        let (mut roster, id) = roster_with_employee();
        let day = date(2024, 6, 3);
        for time in ["08:00", "12:00", "13:00", "17:00"] {
            PunchService::punch(&mut roster, id, day, time, PunchPolicy::Reject).unwrap();
        }
        roster.record_mut(id, day).set_slot(PunchSlot::Out1, None);

        let outcome =
            PunchService::punch(&mut roster, id, day, "12:05", PunchPolicy::Reject).unwrap();
        assert_eq!(outcome.slot, PunchSlot::Out1);
    }
}
