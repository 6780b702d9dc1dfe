//! Employee registry entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};
use crate::schedule::WeeklySchedule;

/// PIN assigned to newly registered employees until the admin changes it.
pub const DEFAULT_EMPLOYEE_PIN: &str = "1234";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub pin: String,
    #[serde(default = "Employee::default_active")]
    pub active: bool,
    #[serde(default)]
    pub schedule: WeeklySchedule,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: None,
            pin: DEFAULT_EMPLOYEE_PIN.into(),
            active: true,
            schedule: WeeklySchedule::default(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        let role = role.into();
        self.role = (!role.trim().is_empty()).then_some(role);
        self
    }

    fn default_active() -> bool {
        true
    }
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_employee_starts_active_with_default_pin_and_schedule() {
        let employee = Employee::new("José da Silva").with_role("Jardineiro");
        assert!(employee.active);
        assert_eq!(employee.pin, DEFAULT_EMPLOYEE_PIN);
        assert_eq!(employee.role.as_deref(), Some("Jardineiro"));
        assert_eq!(employee.schedule, WeeklySchedule::default());
    }

    #[test]
    fn missing_active_flag_deserializes_as_active() {
        let json = format!(
            r#"{{"id":"{}","name":"Maria","pin":"1234"}}"#,
            Uuid::new_v4()
        );
        let employee: Employee = serde_json::from_str(&json).unwrap();
        assert!(employee.active);
        assert_eq!(employee.role, None);
    }
}
