//! Validated mutations for the employee registry.

use uuid::Uuid;

use ponto_domain::{Employee, Roster, Weekday};

use crate::error::CoreError;

type ServiceResult<T> = Result<T, CoreError>;

/// Admin-facing employee and schedule mutations.
///
/// See also: [`crate::RecordService`] for punch-record edits.
pub struct RosterService;

impl RosterService {
    /// Registers a new employee after validating the name.
    pub fn add_employee(
        roster: &mut Roster,
        name: &str,
        role: Option<&str>,
    ) -> ServiceResult<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("employee name must not be empty".into()));
        }
        Self::validate_name(roster, None, name)?;
        let mut employee = Employee::new(name);
        if let Some(role) = role {
            employee = employee.with_role(role);
        }
        let id = employee.id;
        roster.add_employee(employee);
        Ok(id)
    }

    pub fn rename(roster: &mut Roster, id: Uuid, name: &str) -> ServiceResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("employee name must not be empty".into()));
        }
        Self::validate_name(roster, Some(id), name)?;
        let employee = Self::employee_mut(roster, id)?;
        employee.name = name.to_string();
        roster.touch();
        Ok(())
    }

    pub fn set_role(roster: &mut Roster, id: Uuid, role: Option<&str>) -> ServiceResult<()> {
        let employee = Self::employee_mut(roster, id)?;
        employee.role = role
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string);
        roster.touch();
        Ok(())
    }

    /// PINs are exactly four ASCII digits.
    pub fn set_pin(roster: &mut Roster, id: Uuid, pin: &str) -> ServiceResult<()> {
        let pin = pin.trim();
        Self::validate_pin(pin)?;
        let employee = Self::employee_mut(roster, id)?;
        employee.pin = pin.to_string();
        roster.touch();
        Ok(())
    }

    pub fn set_active(roster: &mut Roster, id: Uuid, active: bool) -> ServiceResult<()> {
        let employee = Self::employee_mut(roster, id)?;
        employee.active = active;
        roster.touch();
        Ok(())
    }

    /// Updates one weekday of the employee's schedule. Deactivating a day
    /// zeroes its minutes.
    pub fn set_schedule_day(
        roster: &mut Roster,
        id: Uuid,
        weekday: Weekday,
        active: bool,
        minutes: u32,
    ) -> ServiceResult<()> {
        if minutes > 24 * 60 {
            return Err(CoreError::Validation(
                "scheduled minutes cannot exceed a day".into(),
            ));
        }
        let employee = Self::employee_mut(roster, id)?;
        let day = employee.schedule.day_mut(weekday);
        day.active = active;
        day.minutes = if active { minutes } else { 0 };
        roster.touch();
        Ok(())
    }

    /// Deletes the employee and cascades its records and adjustments.
    pub fn remove_employee(roster: &mut Roster, id: Uuid) -> ServiceResult<()> {
        if roster.remove_employee(id) {
            Ok(())
        } else {
            Err(CoreError::EmployeeNotFound(id.to_string()))
        }
    }

    pub fn set_admin_pin(roster: &mut Roster, pin: &str) -> ServiceResult<()> {
        let pin = pin.trim();
        Self::validate_pin(pin)?;
        roster.admin_pin = pin.to_string();
        roster.touch();
        Ok(())
    }

    /// Snapshot of the registry in roster order.
    pub fn list(roster: &Roster) -> Vec<&Employee> {
        roster.employees.iter().collect()
    }

    fn employee_mut(roster: &mut Roster, id: Uuid) -> ServiceResult<&mut Employee> {
        roster
            .employee_mut(id)
            .ok_or_else(|| CoreError::EmployeeNotFound(id.to_string()))
    }

    fn validate_name(roster: &Roster, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        let duplicate = roster.employees.iter().any(|employee| {
            let name = employee.name.trim().to_lowercase();
            name == normalized && exclude != Some(employee.id)
        });
        if duplicate {
            Err(CoreError::Validation(format!(
                "employee `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }

    fn validate_pin(pin: &str) -> ServiceResult<()> {
        if pin.len() == 4 && pin.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(CoreError::Validation("PIN must be exactly 4 digits".into()))
        }
    }
}
