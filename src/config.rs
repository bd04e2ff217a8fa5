//! Location and layout of folio's on-disk configuration.
//!
//! Everything folio writes lives under one directory, `~/.config/folio/` by
//! default:
//!
//! ```text
//! ~/.config/folio/
//! ├── preferences.toml   # persisted theme preference
//! └── folio.log          # tracing output (the TUI owns the terminal)
//! ```
//!
//! The directory can be overridden with `--config-dir`, which is also how the
//! tests point folio at a temporary directory.

use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "folio";

/// The filename for the preferences file.
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// The filename for the log file.
pub const LOG_FILENAME: &str = "folio.log";

/// Storage key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Comment block written at the top of every preferences file.
pub const PREFERENCES_HEADER: &str = r#"# folio preferences
# Written by folio whenever the theme is toggled.

# Display theme
# - "dark": dark background with cyan/blue/violet accents (default)
# - "light": light background with orange/rose/pink accents
# Any other value is ignored and the dark theme is used.
"#;

/// Keys accepted by `folio config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Theme,
}

impl ConfigKey {
    /// The storage key for this setting.
    pub fn storage_key(self) -> &'static str {
        match self {
            ConfigKey::Theme => THEME_KEY,
        }
    }
}

impl FromStr for ConfigKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theme" => Ok(ConfigKey::Theme),
            _ => Err(FolioError::UnknownConfigKey(s.to_string())),
        }
    }
}

/// Get the default folio config directory path (~/.config/folio/).
///
/// Returns the path to the config directory. Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FolioError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Resolve the config directory, preferring an explicit override.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => config_dir(),
    }
}

/// Ensure a config directory exists.
///
/// Creates the directory (and parents) if needed. Returns whether the
/// directory was newly created (true) or already existed (false).
pub fn ensure_config_dir_at(dir: &Path) -> Result<(PathBuf, bool)> {
    let created = !dir.exists();
    fs::create_dir_all(dir)?;
    Ok((dir.to_path_buf(), created))
}

/// Path to the preferences file inside a config directory.
pub fn preferences_path(dir: &Path) -> PathBuf {
    dir.join(PREFERENCES_FILENAME)
}

/// Path to the log file inside a config directory.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILENAME)
}

/// Render a preferences table as file content, header comments included.
pub fn render_preferences(table: &toml::Table) -> Result<String> {
    let body = toml::to_string(table)?;
    Ok(format!("{PREFERENCES_HEADER}\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_returns_path_ending_with_folio() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/folio"));
    }

    #[test]
    fn test_resolve_config_dir_prefers_override() {
        let dir = resolve_config_dir(Some(Path::new("/tmp/elsewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_resolve_config_dir_without_override_uses_default() {
        assert_eq!(resolve_config_dir(None).unwrap(), config_dir().unwrap());
    }

    #[test]
    fn test_ensure_config_dir_at_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("folio");

        let (path, created) = ensure_config_dir_at(&dir).unwrap();
        assert!(created);
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_config_dir_at_reports_existing_directory() {
        let temp = TempDir::new().unwrap();

        let (_, created) = ensure_config_dir_at(temp.path()).unwrap();
        assert!(!created);
    }

    #[test]
    fn test_file_paths_live_in_config_dir() {
        let dir = Path::new("/home/user/.config/folio");
        assert_eq!(
            preferences_path(dir),
            PathBuf::from("/home/user/.config/folio/preferences.toml")
        );
        assert_eq!(
            log_path(dir),
            PathBuf::from("/home/user/.config/folio/folio.log")
        );
    }

    #[test]
    fn test_render_preferences_includes_header_and_values() {
        let mut table = toml::Table::new();
        table.insert(
            THEME_KEY.to_string(),
            toml::Value::String("light".to_string()),
        );

        let content = render_preferences(&table).unwrap();
        assert!(content.starts_with("# folio preferences"));
        assert!(content.contains("theme = \"light\""));

        let parsed: toml::Table = toml::from_str(&content).unwrap();
        assert_eq!(parsed.get(THEME_KEY).and_then(|v| v.as_str()), Some("light"));
    }

    #[test]
    fn test_config_key_parses_theme() {
        assert_eq!("theme".parse::<ConfigKey>().unwrap(), ConfigKey::Theme);
        assert_eq!(" Theme ".parse::<ConfigKey>().unwrap(), ConfigKey::Theme);
        assert_eq!(ConfigKey::Theme.storage_key(), "theme");
    }

    #[test]
    fn test_config_key_rejects_unknown() {
        let err = "font".parse::<ConfigKey>().unwrap_err();
        assert!(err.to_string().contains("font"));
    }
}
