use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ponto_domain::PunchPolicy;

/// Stores user-configurable CLI preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// What a punch does once all four slots of the day are filled. Unknown
    /// values in a stored file fall back to the default (reject).
    #[serde(default)]
    pub punch_policy: PunchPolicy,
    #[serde(default = "Config::default_period_days")]
    pub period_days: u32,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_roster: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for rosters. Defaults to `~/Documents/Ponto`.
    pub default_roster_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups. Defaults to `~/Documents/Ponto/backups`.
    pub default_backup_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            punch_policy: PunchPolicy::default(),
            period_days: Self::default_period_days(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            last_opened_roster: None,
            default_roster_root: None,
            default_backup_root: None,
        }
    }
}

impl Config {
    pub fn default_period_days() -> u32 {
        30
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_default_roster_root(&self) -> PathBuf {
        if let Some(path) = &self.default_roster_root {
            return path.clone();
        }
        documents_base().join("Ponto")
    }

    pub fn resolve_default_backup_root(&self) -> PathBuf {
        if let Some(path) = &self.default_backup_root {
            return path.clone();
        }
        documents_base().join("Ponto").join("backups")
    }
}

fn documents_base() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_thirty_day_window_with_strict_punching() {
        let config = Config::default();
        assert_eq!(config.period_days, 30);
        assert_eq!(config.punch_policy, PunchPolicy::Reject);
        assert!(config.ui_color_enabled);
        assert_eq!(config.last_opened_roster, None);
    }

    #[test]
    fn unknown_policy_strings_fall_back_to_reject() {
        let config: Config =
            serde_json::from_str(r#"{"punch_policy":"whatever","period_days":15}"#).unwrap();
        assert_eq!(config.punch_policy, PunchPolicy::Reject);
        assert_eq!(config.period_days, 15);
    }

    #[test]
    fn partial_document_merges_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"punch_policy":"overwrite"}"#).unwrap();
        assert_eq!(config.punch_policy, PunchPolicy::Overwrite);
        assert_eq!(config.period_days, 30);
        assert!(config.ui_color_enabled);
    }

    #[test]
    fn explicit_roots_win_over_the_documents_default() {
        let mut config = Config::default();
        config.default_roster_root = Some(PathBuf::from("/tmp/ponto"));
        assert_eq!(config.resolve_default_roster_root(), PathBuf::from("/tmp/ponto"));
        assert!(config
            .resolve_default_backup_root()
            .ends_with("Ponto/backups"));
    }
}
