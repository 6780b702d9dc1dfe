use ponto_config::{Config, ConfigManager};
use ponto_domain::PunchPolicy;
use tempfile::tempdir;

#[test]
fn missing_file_loads_the_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let cfg = manager.load().expect("load");
    assert_eq!(cfg.period_days, 30);
    assert_eq!(cfg.punch_policy, PunchPolicy::Reject);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.punch_policy = PunchPolicy::Overwrite;
    cfg.period_days = 14;
    cfg.last_opened_roster = Some("Rancho".into());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.punch_policy, PunchPolicy::Overwrite);
    assert_eq!(loaded.period_days, 14);
    assert_eq!(loaded.last_opened_roster.as_deref(), Some("Rancho"));
}

#[test]
fn backup_and_restore_round_trip() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.period_days = 7;
    let name = manager.backup(&cfg, Some("antes do teste")).expect("backup");
    assert!(name.contains("antes-do-teste"));

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.period_days, 7);
    assert!(manager.list_backups().expect("list").contains(&name));
}
