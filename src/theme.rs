//! Display theme, its palette, and the controller that persists it.
//!
//! The theme is the only piece of state that outlives a session. The
//! [`ThemeController`] reads it once at startup, and every toggle re-applies
//! the palette and writes the new value back through a [`PreferenceStore`].
//! Storage problems never reach the user: a failed read means the dark theme,
//! a failed write is logged and forgotten.

use crate::config::THEME_KEY;
use crate::error::{FolioError, Result};
use crate::storage::PreferenceStore;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The value persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(FolioError::UnknownTheme(other.to_string())),
        }
    }
}

/// Style descriptor derived from a theme.
///
/// Renderers never branch on [`Theme`] directly; they ask for the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text.
    pub muted: Color,
    pub border: Color,
    /// Fill for the project detail overlay.
    pub overlay: Color,
    /// Three gradient stops, left to right.
    pub accent: [Color; 3],
    /// Unfilled portion of a skill arc.
    pub track: Color,
    /// Active filter chip.
    pub chip_active_fg: Color,
    pub chip_active_bg: Color,
    /// Glyph on the theme toggle button.
    pub toggle_glyph: &'static str,
}

impl Palette {
    /// The palette for a theme.
    pub const fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                background: Color::Rgb(8, 8, 11),
                foreground: Color::Rgb(241, 245, 249),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(30, 41, 59),
                overlay: Color::Rgb(11, 11, 13),
                accent: [
                    Color::Rgb(34, 211, 238),
                    Color::Rgb(59, 130, 246),
                    Color::Rgb(139, 92, 246),
                ],
                track: Color::Rgb(30, 41, 59),
                chip_active_fg: Color::Rgb(241, 245, 249),
                chip_active_bg: Color::Rgb(38, 38, 44),
                toggle_glyph: "☾",
            },
            Theme::Light => Palette {
                background: Color::Rgb(248, 250, 252),
                foreground: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(226, 232, 240),
                overlay: Color::Rgb(255, 255, 255),
                accent: [
                    Color::Rgb(251, 146, 60),
                    Color::Rgb(244, 63, 94),
                    Color::Rgb(236, 72, 153),
                ],
                track: Color::Rgb(226, 232, 240),
                chip_active_fg: Color::Rgb(255, 255, 255),
                chip_active_bg: Color::Rgb(15, 23, 42),
                toggle_glyph: "☀",
            },
        }
    }

    /// Sample the accent gradient at `t` in `0.0..=1.0`.
    pub fn accent_at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (from, to, local) = if t <= 0.5 {
            (self.accent[0], self.accent[1], t * 2.0)
        } else {
            (self.accent[1], self.accent[2], (t - 0.5) * 2.0)
        };
        lerp_color(from, to, local)
    }
}

fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Read the persisted theme, falling back to dark on any problem.
pub fn read_theme(store: &dyn PreferenceStore) -> Theme {
    match store.read(THEME_KEY) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e: FolioError| {
            tracing::warn!(error = %e, "ignoring stored theme");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, location = %store.location(), "could not read theme preference");
            Theme::default()
        }
    }
}

/// Owns the current theme, its palette, and the store it persists to.
pub struct ThemeController {
    theme: Theme,
    palette: Palette,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Initialize from storage and apply the result.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let theme = read_theme(store.as_ref());
        let mut controller = Self {
            theme,
            palette: Palette::for_theme(theme),
            store,
        };
        controller.apply();
        tracing::info!(theme = %theme, "theme loaded");
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Flip between dark and light. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.apply();
        tracing::info!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Propagate the current theme to the palette and to storage.
    fn apply(&mut self) {
        self.palette = Palette::for_theme(self.theme);
        if let Err(e) = self.store.write(THEME_KEY, self.theme.as_str()) {
            tracing::warn!(error = %e, location = %self.store.location(), "could not persist theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, TomlFileStore};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn denied(what: &str) -> FolioError {
        FolioError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, what))
    }

    /// Store that fails every operation and counts write attempts.
    struct FailingStore {
        writes: Rc<Cell<usize>>,
    }

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(denied("read denied"))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            Err(denied("write denied"))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(denied("remove denied"))
        }

        fn location(&self) -> String {
            "nowhere".to_string()
        }
    }

    /// Store whose reads succeed but whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl PreferenceStore for ReadOnlyStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.0.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(denied("read-only"))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(denied("read-only"))
        }

        fn location(&self) -> String {
            "read-only".to_string()
        }
    }

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(matches!(
            "Light".parse::<Theme>(),
            Err(FolioError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_theme_toggled_is_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_load_without_persisted_value_is_dark() {
        let controller = ThemeController::load(Box::new(MemoryStore::new()));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_load_with_persisted_light_is_light() {
        let controller = ThemeController::load(Box::new(MemoryStore::with_value("theme", "light")));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.palette(), Palette::for_theme(Theme::Light));
    }

    #[test]
    fn test_load_with_corrupted_value_is_dark() {
        let controller = ThemeController::load(Box::new(MemoryStore::with_value("theme", "sepia")));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_load_with_failing_store_is_dark() {
        let writes = Rc::new(Cell::new(0));
        let controller = ThemeController::load(Box::new(FailingStore {
            writes: Rc::clone(&writes),
        }));
        assert_eq!(controller.theme(), Theme::Dark);
        // The startup apply still attempted to persist.
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut controller = ThemeController::load(Box::new(MemoryStore::new()));
        let original = controller.theme();

        controller.toggle();
        assert_ne!(controller.theme(), original);
        controller.toggle();
        assert_eq!(controller.theme(), original);
    }

    #[test]
    fn test_toggle_with_failing_writes_still_changes_theme() {
        let writes = Rc::new(Cell::new(0));
        let mut controller = ThemeController::load(Box::new(FailingStore {
            writes: Rc::clone(&writes),
        }));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.palette(), Palette::for_theme(Theme::Light));
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn test_read_only_store_keeps_persisted_theme_and_toggles_in_memory() {
        let mut controller =
            ThemeController::load(Box::new(ReadOnlyStore(MemoryStore::with_value("theme", "light"))));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_to_file() {
        let temp = TempDir::new().unwrap();
        let mut controller = ThemeController::load(Box::new(TomlFileStore::in_config_dir(temp.path())));
        controller.toggle();

        let reader = TomlFileStore::in_config_dir(temp.path());
        assert_eq!(read_theme(&reader), Theme::Light);

        // A fresh controller picks up the persisted value.
        let reloaded = ThemeController::load(Box::new(reader));
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_load_writes_initial_theme() {
        let temp = TempDir::new().unwrap();
        let _controller = ThemeController::load(Box::new(TomlFileStore::in_config_dir(temp.path())));

        let reader = TomlFileStore::in_config_dir(temp.path());
        assert_eq!(reader.read("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_palettes_differ_between_themes() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.accent, light.accent);
        assert_ne!(dark.toggle_glyph, light.toggle_glyph);
    }

    #[test]
    fn test_accent_at_hits_gradient_stops() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.accent_at(0.0), palette.accent[0]);
        assert_eq!(palette.accent_at(0.5), palette.accent[1]);
        assert_eq!(palette.accent_at(1.0), palette.accent[2]);
        // Out of range input is clamped.
        assert_eq!(palette.accent_at(-3.0), palette.accent[0]);
        assert_eq!(palette.accent_at(7.0), palette.accent[2]);
    }

    #[test]
    fn test_accent_at_interpolates_between_stops() {
        let palette = Palette::for_theme(Theme::Light);
        let Color::Rgb(r, _, _) = palette.accent_at(0.25) else {
            panic!("expected an RGB colour");
        };
        // Halfway between 251 and 244.
        assert!((244..=251).contains(&r));
    }
}
