//! Shared runtime state for CLI interactions.

use std::{path::PathBuf, sync::Arc};

use ponto_config::{Config, ConfigManager};
use ponto_core::{
    storage::{roster_warnings, RosterStorage},
    Clock,
};
use ponto_domain::{Period, Roster};
use ponto_storage_json::JsonRosterStorage;

use crate::errors::CliError;

use super::system_clock::SystemClock;

/// Roster opened when the configuration does not name one.
pub const DEFAULT_ROSTER_NAME: &str = "Ponto Rancho J&L";

pub struct ShellContext {
    pub config_manager: ConfigManager,
    pub config: Config,
    pub storage: JsonRosterStorage,
    pub roster: Roster,
    pub roster_name: String,
    pub clock: Arc<dyn Clock>,
    pub period: Period,
    /// Admin menus are PIN-gated once per session.
    pub admin_unlocked: bool,
}

impl ShellContext {
    /// Builds the context from the user's configuration directory.
    pub fn bootstrap() -> Result<Self, CliError> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ponto");
        Self::bootstrap_with(base, Arc::new(SystemClock))
    }

    /// Bootstrap against an explicit base directory and clock.
    ///
    /// A broken configuration file falls back to defaults; a missing or
    /// broken roster document falls back to the seeded default. Neither is
    /// surfaced as an error.
    pub fn bootstrap_with(base: PathBuf, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load().unwrap_or_else(|err| {
            tracing::warn!("configuration could not be read ({err}); using defaults");
            Config::default()
        });

        let storage = JsonRosterStorage::new(
            config.resolve_default_roster_root(),
            config.resolve_default_backup_root(),
        )?;
        let roster_name = config
            .last_opened_roster
            .clone()
            .unwrap_or_else(|| DEFAULT_ROSTER_NAME.to_string());
        let (roster, warning) = storage.load_roster_or_seed(&roster_name);
        if let Some(warning) = warning {
            tracing::warn!("{warning}");
        }
        for warning in roster_warnings(&roster) {
            tracing::warn!("{warning}");
        }

        let period = Period::ending_at(clock.today(), config.period_days);
        Ok(Self {
            config_manager,
            config,
            storage,
            roster,
            roster_name,
            clock,
            period,
            admin_unlocked: false,
        })
    }

    /// Persists the roster after a mutation. Every state change goes through
    /// here, keeping the on-disk document current (single-writer model).
    pub fn save_roster(&self) -> Result<(), CliError> {
        self.storage.save_roster(&self.roster_name, &self.roster)?;
        Ok(())
    }

    pub fn save_config(&self) -> Result<(), CliError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }
}
