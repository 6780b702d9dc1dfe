use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use ponto_domain::Roster;

use crate::CoreError;

/// Describes a persisted backup artifact for a roster.
#[derive(Debug, Clone)]
pub struct RosterBackupInfo {
    pub roster: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing rosters and
/// backups.
pub trait RosterStorage: Send + Sync {
    fn save_roster(&self, name: &str, roster: &Roster) -> Result<(), CoreError>;
    fn load_roster(&self, name: &str) -> Result<Roster, CoreError>;
    fn list_rosters(&self) -> Result<Vec<String>, CoreError>;
    fn delete_roster(&self, name: &str) -> Result<(), CoreError>;
    fn save_roster_to_path(&self, roster: &Roster, path: &Path) -> Result<(), CoreError>;
    fn load_roster_from_path(&self, path: &Path) -> Result<Roster, CoreError>;
    fn backup_roster(
        &self,
        name: &str,
        roster: &Roster,
        note: Option<&str>,
    ) -> Result<RosterBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<RosterBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &RosterBackupInfo) -> Result<Roster, CoreError>;
}

/// Detects dangling references within a roster snapshot.
pub fn roster_warnings(roster: &Roster) -> Vec<String> {
    let employee_ids: HashSet<_> = roster.employees.iter().map(|e| e.id).collect();
    let mut warnings = Vec::new();

    for (employee_id, days) in &roster.records {
        if !employee_ids.contains(employee_id) {
            warnings.push(format!(
                "{} punch record(s) reference unknown employee {}",
                days.len(),
                employee_id
            ));
        }
    }
    for (employee_id, days) in &roster.adjustments {
        if !employee_ids.contains(employee_id) {
            warnings.push(format!(
                "{} adjustment(s) reference unknown employee {}",
                days.len(),
                employee_id
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ponto_domain::{AdjustmentKind, DayAdjustment, Employee};
    use uuid::Uuid;

    #[test]
    fn clean_roster_has_no_warnings() {
        let mut roster = Roster::new("Test");
        let employee = Employee::new("Maria");
        let id = employee.id;
        roster.add_employee(employee);
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        roster.record_mut(id, day).in1 = Some("08:00".into());

        assert!(roster_warnings(&roster).is_empty());
    }

    #[test]
    fn dangling_records_and_adjustments_are_reported() {
        let mut roster = Roster::new("Test");
        let ghost = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        roster.record_mut(ghost, day).in1 = Some("08:00".into());
        roster.upsert_adjustment(ghost, day, DayAdjustment::new(AdjustmentKind::Folga));

        let warnings = roster_warnings(&roster);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("punch record"));
        assert!(warnings[1].contains("adjustment"));
    }
}
