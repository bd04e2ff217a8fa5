//! The interactive portfolio.

use super::Context;
use crate::assets::AssetLibrary;
use crate::catalog::{PROFILE, PROJECTS};
use crate::error::Result;
use crate::theme::ThemeController;
use crate::tui::{self, PortfolioApp};

/// Load the theme and assets, then hand the terminal to the TUI.
pub fn show_command(ctx: &Context) -> Result<()> {
    let theme = ThemeController::load(ctx.open_store()?);
    let assets = AssetLibrary::scan(&ctx.assets, &PROFILE, PROJECTS);
    tui::run(PortfolioApp::new(theme, assets))
}
