//! ponto-storage-json
//!
//! Filesystem-backed JSON persistence for rosters and their backups.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use ponto_core::{
    storage::{RosterBackupInfo, RosterStorage},
    CoreError,
};
use ponto_domain::Roster;

const ROSTER_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// JSON documents on disk, one per roster, with timestamped backups.
#[derive(Clone)]
pub struct JsonRosterStorage {
    rosters_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonRosterStorage {
    pub fn new(rosters_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(rosters_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        rosters_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&rosters_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            rosters_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn roster_path(&self, name: &str) -> PathBuf {
        self.rosters_dir
            .join(format!("{}.{}", canonical_name(name), ROSTER_EXTENSION))
    }

    pub fn backup_path(&self, name: &str, backup: &str) -> PathBuf {
        self.backup_dir(name).join(backup)
    }

    /// Loads the named roster, falling back to a freshly seeded document when
    /// the file is missing or unreadable. The seeded document is written back
    /// so the next load finds it; a recovery produces a warning string for
    /// the caller to log, never an error.
    pub fn load_roster_or_seed(&self, name: &str) -> (Roster, Option<String>) {
        let path = self.roster_path(name);
        if !path.exists() {
            let roster = Roster::seeded(name);
            let warning = self
                .save_roster(name, &roster)
                .err()
                .map(|err| format!("could not persist seeded roster `{}`: {}", name, err));
            return (roster, warning);
        }
        match self.load_roster(name) {
            Ok(roster) => (roster, None),
            Err(err) => {
                let roster = Roster::seeded(name);
                let _ = self.save_roster(name, &roster);
                (
                    roster,
                    Some(format!(
                        "roster `{}` could not be read ({}); starting over from the seeded default",
                        name, err
                    )),
                )
            }
        }
    }

    pub fn list_roster_metadata(&self) -> Result<Vec<RosterMetadata>, CoreError> {
        let mut entries = Vec::new();
        for slug in self.list_rosters()? {
            let roster = self.load_roster(&slug)?;
            entries.push(RosterMetadata {
                slug: slug.clone(),
                name: roster.name.clone(),
                path: self.roster_path(&slug),
                created_at: roster.created_at,
                updated_at: roster.updated_at,
                employee_count: roster.employees.len(),
                record_count: roster.record_count(),
                adjustment_count: roster.adjustment_count(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    pub fn delete_backup(&self, name: &str, backup_id: &str) -> Result<(), CoreError> {
        let path = self.backup_path(name, backup_id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn write_backup_file(
        &self,
        roster: &Roster,
        name: &str,
        note: Option<&str>,
    ) -> Result<RosterBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, ROSTER_EXTENSION);
        let path = dir.join(&file_name);
        write_atomic(&path, &serialize_roster(roster)?)?;
        self.prune_backups(name)?;
        Ok(RosterBackupInfo {
            roster: canonical_name(name),
            id: file_name,
            created_at: timestamp,
            path,
        })
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let file_name = format!(
            "{}_{}.{}",
            canonical_name(name),
            timestamp,
            ROSTER_EXTENSION
        );
        fs::copy(path, dir.join(file_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for entry in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl RosterStorage for JsonRosterStorage {
    fn save_roster(&self, name: &str, roster: &Roster) -> Result<(), CoreError> {
        let path = self.roster_path(name);
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        save_roster_to_path(roster, &path)
    }

    fn load_roster(&self, name: &str) -> Result<Roster, CoreError> {
        load_roster_from_path(&self.roster_path(name))
    }

    fn list_rosters(&self) -> Result<Vec<String>, CoreError> {
        if !self.rosters_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.rosters_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(ROSTER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_roster(&self, name: &str) -> Result<(), CoreError> {
        let path = self.roster_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_roster_to_path(&self, roster: &Roster, path: &Path) -> Result<(), CoreError> {
        if path.starts_with(&self.rosters_dir) {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                self.backup_existing_file(stem, path)?;
            }
        }
        save_roster_to_path(roster, path)
    }

    fn load_roster_from_path(&self, path: &Path) -> Result<Roster, CoreError> {
        load_roster_from_path(path)
    }

    fn backup_roster(
        &self,
        name: &str,
        roster: &Roster,
        note: Option<&str>,
    ) -> Result<RosterBackupInfo, CoreError> {
        self.write_backup_file(roster, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<RosterBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let roster_slug = canonical_name(name);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ROSTER_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(RosterBackupInfo {
                    roster: roster_slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &RosterBackupInfo) -> Result<Roster, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.roster_path(&backup.roster);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_roster_from_path(&target)
    }
}

/// Saves a roster to an arbitrary path on disk.
pub fn save_roster_to_path(roster: &Roster, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_roster(roster)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a roster from the provided filesystem path.
pub fn load_roster_from_path(path: &Path) -> Result<Roster, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

#[derive(Debug, Clone)]
pub struct RosterMetadata {
    pub slug: String,
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub employee_count: usize,
    pub record_count: usize,
    pub adjustment_count: usize,
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "roster".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.'))
            && !sanitized.is_empty()
            && !last_dash
        {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", ROSTER_EXTENSION))?;
    let mut segments = trimmed.split('_').collect::<Vec<_>>();
    if segments.len() < 2 {
        return None;
    }
    let time = segments.pop()?;
    let date = segments.pop()?;
    if !is_digits(date, 8) || !is_digits(time, 4) {
        return None;
    }
    let raw = format!("{}{}", date, time);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_roster(roster: &Roster) -> Result<String, CoreError> {
    serde_json::to_string_pretty(roster).map_err(|err| CoreError::Serde(err.to_string()))
}
