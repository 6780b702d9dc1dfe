//! The roster: the single persisted document holding employees, punch
//! records, and adjustments.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adjustment::DayAdjustment;
use crate::employee::Employee;
use crate::record::DayRecord;

/// Admin PIN assigned to a fresh roster until it is changed.
pub const DEFAULT_ADMIN_PIN: &str = "9999";

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Everything the application persists, in one JSON-serializable document.
///
/// Per-employee maps are keyed by employee id, then calendar date, which
/// guarantees at most one record and one adjustment per (employee, date).
pub struct Roster {
    pub name: String,
    #[serde(default = "Roster::default_admin_pin")]
    pub admin_pin: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub records: BTreeMap<Uuid, BTreeMap<NaiveDate, DayRecord>>,
    #[serde(default)]
    pub adjustments: BTreeMap<Uuid, BTreeMap<NaiveDate, DayAdjustment>>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            admin_pin: DEFAULT_ADMIN_PIN.into(),
            created_at: now,
            updated_at: now,
            employees: Vec::new(),
            records: BTreeMap::new(),
            adjustments: BTreeMap::new(),
        }
    }

    /// First-run document with the example employee, so the punch screen is
    /// usable before anyone is registered.
    pub fn seeded(name: impl Into<String>) -> Self {
        let mut roster = Self::new(name);
        roster
            .employees
            .push(Employee::new("Caseiro João (exemplo)").with_role("Caseiro"));
        roster
    }

    fn default_admin_pin() -> String {
        DEFAULT_ADMIN_PIN.into()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn employee(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn employee_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|employee| employee.id == id)
    }

    pub fn active_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|employee| employee.active)
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
        self.touch();
    }

    /// Removes the employee and every record and adjustment keyed to it.
    pub fn remove_employee(&mut self, id: Uuid) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        if self.employees.len() == before {
            return false;
        }
        self.records.remove(&id);
        self.adjustments.remove(&id);
        self.touch();
        true
    }

    pub fn record(&self, employee_id: Uuid, date: NaiveDate) -> Option<&DayRecord> {
        self.records.get(&employee_id)?.get(&date)
    }

    /// The record for (employee, date), created empty if absent.
    pub fn record_mut(&mut self, employee_id: Uuid, date: NaiveDate) -> &mut DayRecord {
        self.records
            .entry(employee_id)
            .or_default()
            .entry(date)
            .or_default()
    }

    pub fn remove_record(&mut self, employee_id: Uuid, date: NaiveDate) -> bool {
        let removed = self
            .records
            .get_mut(&employee_id)
            .and_then(|days| days.remove(&date))
            .is_some();
        if removed {
            self.touch();
        }
        removed
    }

    pub fn adjustment(&self, employee_id: Uuid, date: NaiveDate) -> Option<&DayAdjustment> {
        self.adjustments.get(&employee_id)?.get(&date)
    }

    pub fn upsert_adjustment(
        &mut self,
        employee_id: Uuid,
        date: NaiveDate,
        adjustment: DayAdjustment,
    ) {
        self.adjustments
            .entry(employee_id)
            .or_default()
            .insert(date, adjustment);
        self.touch();
    }

    pub fn remove_adjustment(&mut self, employee_id: Uuid, date: NaiveDate) -> bool {
        let removed = self
            .adjustments
            .get_mut(&employee_id)
            .and_then(|days| days.remove(&date))
            .is_some();
        if removed {
            self.touch();
        }
        removed
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(BTreeMap::len).sum()
    }

    pub fn adjustment_count(&self) -> usize {
        self.adjustments.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::AdjustmentKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seeded_roster_has_the_example_employee() {
        let roster = Roster::seeded("Ponto Rancho J&L");
        assert_eq!(roster.employees.len(), 1);
        assert_eq!(roster.admin_pin, DEFAULT_ADMIN_PIN);
        assert!(roster.employees[0].name.contains("exemplo"));
    }

    #[test]
    fn removing_an_employee_cascades() {
        let mut roster = Roster::new("Test");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);
        roster.record_mut(id, date(2024, 5, 1)).in1 = Some("08:00".into());
        roster.upsert_adjustment(id, date(2024, 5, 2), DayAdjustment::new(AdjustmentKind::Folga));

        assert!(roster.remove_employee(id));
        assert!(roster.employees.is_empty());
        assert_eq!(roster.record_count(), 0);
        assert_eq!(roster.adjustment_count(), 0);
        assert!(!roster.remove_employee(id));
    }

    #[test]
    fn one_record_per_employee_and_date() {
        let mut roster = Roster::new("Test");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);

        roster.record_mut(id, date(2024, 5, 1)).in1 = Some("08:00".into());
        roster.record_mut(id, date(2024, 5, 1)).out1 = Some("12:00".into());
        assert_eq!(roster.record_count(), 1);

        let record = roster.record(id, date(2024, 5, 1)).unwrap();
        assert_eq!(record.in1.as_deref(), Some("08:00"));
        assert_eq!(record.out1.as_deref(), Some("12:00"));
    }

    #[test]
    fn partial_document_loads_with_defaults() {
        let roster: Roster = serde_json::from_str(r#"{"name":"Ponto"}"#).unwrap();
        assert_eq!(roster.admin_pin, DEFAULT_ADMIN_PIN);
        assert!(roster.employees.is_empty());
        assert_eq!(roster.record_count(), 0);
    }

    #[test]
    fn date_keys_round_trip_through_json() {
        let mut roster = Roster::new("Test");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);
        roster.record_mut(id, date(2024, 5, 1)).in1 = Some("08:00".into());

        let json = serde_json::to_string(&roster).unwrap();
        assert!(json.contains("\"2024-05-01\""));
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.record(id, date(2024, 5, 1)).unwrap().in1.as_deref(),
            Some("08:00")
        );
    }
}
