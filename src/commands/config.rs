//! Config command handler.
//!
//! Displays, sets, and resets the stored preferences.

use super::Context;
use crate::config::{ConfigKey, THEME_KEY};
use crate::error::Result;
use crate::output::{print_success, print_warning, BOLD, CYAN, GRAY, RESET, YELLOW};
use crate::storage::PreferenceStore;
use crate::theme::{read_theme, Theme};
use clap::Subcommand;

/// Subcommands of `folio config`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSubcommand {
    /// Set a configuration value
    #[command(after_help = "EXAMPLES:
    folio config set theme light
    folio config set theme dark")]
    Set {
        /// The key to set (only `theme`)
        key: String,

        /// The new value (`dark` or `light`)
        value: String,
    },

    /// Remove stored preferences so defaults apply again
    Reset,
}

/// Display the stored preferences and what is in effect.
pub fn config_display_command(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    println!("{BOLD}# Preferences{RESET}");
    println!("{GRAY}# {}{RESET}", store.location());
    println!();

    match store.read(THEME_KEY) {
        Ok(None) => println!("{YELLOW}# (not set, using default){RESET}"),
        Ok(Some(value)) if value.parse::<Theme>().is_err() => {
            println!("{YELLOW}# (stored value \"{value}\" is not recognized, using default){RESET}")
        }
        Ok(Some(_)) => {}
        Err(e) => print_warning(&format!("could not read preferences: {e}")),
    }

    print_preferences_as_toml(&preferences_to_toml_string(read_theme(&*store)));
    Ok(())
}

/// Print TOML `key = value` lines with the keys highlighted.
fn print_preferences_as_toml(toml: &str) {
    for line in toml.lines() {
        match line.split_once(" = ") {
            Some((key, value)) => println!("{CYAN}{key}{RESET} = {value}"),
            None => println!("{line}"),
        }
    }
}

/// Set a preference by key.
pub fn config_set_command(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    let value = match key {
        ConfigKey::Theme => value.trim().to_ascii_lowercase().parse::<Theme>()?.as_str(),
    };

    let mut store = ctx.open_store()?;
    store.write(key.storage_key(), value)?;
    tracing::info!(key = key.storage_key(), value, "preference set");

    print_success(&format!(
        "{} = \"{}\" {GRAY}({}){RESET}",
        key.storage_key(),
        value,
        store.location()
    ));
    if ctx.ephemeral {
        print_warning("--ephemeral is set; nothing was saved");
    }
    Ok(())
}

/// Clear stored preferences.
pub fn config_reset_command(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    store.remove(THEME_KEY)?;
    tracing::info!("preferences reset");
    print_success(&format!(
        "Preferences reset; theme defaults to \"{}\"",
        Theme::default()
    ));
    Ok(())
}

/// The effective preferences as TOML, as `folio config` shows them.
pub fn preferences_to_toml_string(theme: Theme) -> String {
    format!("{THEME_KEY} = \"{}\"", theme)
}
