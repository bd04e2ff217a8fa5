//! CLI command handlers for folio.
//!
//! - [`show`] - The interactive portfolio (default)
//! - [`projects`] - Print the project gallery
//! - [`skills`] - Print the skill list
//! - [`config`] - Inspect and edit stored preferences

mod config;
mod projects;
mod show;
mod skills;

pub use config::{
    config_display_command, config_reset_command, config_set_command, preferences_to_toml_string,
    ConfigSubcommand,
};
pub use projects::{projects_command, projects_json};
pub use show::show_command;
pub use skills::skills_command;

use crate::config::{ensure_config_dir_at, resolve_config_dir};
use crate::error::Result;
use crate::storage::{MemoryStore, PreferenceStore, TomlFileStore};
use std::path::PathBuf;

/// Settings every subcommand shares, taken from the global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// `--config-dir`; `None` means `~/.config/folio/`.
    pub config_dir: Option<PathBuf>,
    /// `--ephemeral`: keep preferences in memory only.
    pub ephemeral: bool,
    /// `--assets`: where the images live.
    pub assets: PathBuf,
}

impl Context {
    pub fn resolved_config_dir(&self) -> Result<PathBuf> {
        resolve_config_dir(self.config_dir.as_deref())
    }

    /// Open the preference store these flags select.
    pub fn open_store(&self) -> Result<Box<dyn PreferenceStore>> {
        if self.ephemeral {
            return Ok(Box::new(MemoryStore::new()));
        }
        let dir = self.resolved_config_dir()?;
        let (dir, created) = ensure_config_dir_at(&dir)?;
        if created {
            tracing::info!(dir = %dir.display(), "created config directory");
        }
        Ok(Box::new(TomlFileStore::in_config_dir(&dir)))
    }
}
