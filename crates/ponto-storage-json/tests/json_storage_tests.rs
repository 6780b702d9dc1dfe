use std::fs;

use ponto_core::storage::RosterStorage;
use ponto_domain::{Employee, Roster};
use ponto_storage_json::JsonRosterStorage;
use tempfile::tempdir;

fn storage_in(dir: &tempfile::TempDir) -> JsonRosterStorage {
    JsonRosterStorage::new(dir.path().join("rosters"), dir.path().join("backups"))
        .expect("create storage")
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    let mut roster = Roster::new("Rancho J&L");
    roster.add_employee(Employee::new("Maria"));

    storage.save_roster("Rancho J&L", &roster).expect("save");
    let loaded = storage.load_roster("Rancho J&L").expect("load");

    assert_eq!(loaded.name, "Rancho J&L");
    assert_eq!(loaded.employees.len(), 1);
    let path = storage.roster_path("Rancho J&L");
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
}

#[test]
fn saving_over_an_existing_file_backs_it_up_first() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    let mut roster = Roster::new("Ponto");
    storage.save_roster("Ponto", &roster).expect("first save");
    roster.add_employee(Employee::new("Maria"));
    storage.save_roster("Ponto", &roster).expect("second save");

    let backups = storage.list_backups("Ponto").expect("list backups");
    assert_eq!(backups.len(), 1);

    let restored = storage.restore_backup(&backups[0]).expect("restore");
    assert!(restored.employees.is_empty(), "backup predates the employee");
}

#[test]
fn explicit_backups_carry_the_sanitized_note() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    let roster = Roster::new("Ponto");
    let info = storage
        .backup_roster("Ponto", &roster, Some("antes da Limpeza!"))
        .expect("backup");

    assert!(info.id.contains("antes-da-limpeza"), "id: {}", info.id);
    assert!(info.path.exists());
    let listed = storage.list_backups("Ponto").expect("list");
    assert!(listed.iter().any(|entry| entry.id == info.id));
}

#[test]
fn missing_file_seeds_a_default_roster_and_persists_it() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    let (roster, warning) = storage.load_roster_or_seed("Ponto");
    assert!(warning.is_none(), "warning: {warning:?}");
    assert_eq!(roster.employees.len(), 1, "seed includes the example employee");
    assert!(storage.roster_path("Ponto").exists(), "seed was written back");

    let reloaded = storage.load_roster("Ponto").expect("reload");
    assert_eq!(reloaded.employees.len(), 1);
}

#[test]
fn corrupt_file_recovers_to_the_seeded_default_with_a_warning() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    fs::write(storage.roster_path("Ponto"), "{not json").expect("write corrupt file");

    let (roster, warning) = storage.load_roster_or_seed("Ponto");
    assert!(warning.is_some());
    assert_eq!(roster.employees.len(), 1);

    // The recovered document replaced the corrupt one on disk.
    let reloaded = storage.load_roster("Ponto").expect("reload");
    assert_eq!(reloaded.name, roster.name);
}

#[test]
fn retention_prunes_old_backups() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonRosterStorage::with_retention(
        dir.path().join("rosters"),
        dir.path().join("backups"),
        2,
    )
    .expect("create storage");

    let roster = Roster::new("Ponto");
    for note in ["um", "dois", "tres", "quatro"] {
        storage
            .backup_roster("Ponto", &roster, Some(note))
            .expect("backup");
    }

    let backups = storage.list_backups("Ponto").expect("list");
    assert!(backups.len() <= 2, "kept {} backups", backups.len());
}

#[test]
fn metadata_lists_counts_per_roster() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(&dir);

    let mut roster = Roster::new("Rancho");
    let employee = Employee::new("Maria");
    let id = employee.id;
    roster.add_employee(employee);
    let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    roster.record_mut(id, day).in1 = Some("08:00".into());
    storage.save_roster("Rancho", &roster).expect("save");

    let metadata = storage.list_roster_metadata().expect("metadata");
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].name, "Rancho");
    assert_eq!(metadata[0].slug, "rancho");
    assert_eq!(metadata[0].employee_count, 1);
    assert_eq!(metadata[0].record_count, 1);
    assert_eq!(metadata[0].adjustment_count, 0);
}
