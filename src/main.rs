//! folio CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use folio::commands::{
    config_display_command, config_reset_command, config_set_command, projects_command,
    show_command, skills_command, ConfigSubcommand, Context,
};
use folio::completion::{print_completion_script, ShellType, SUPPORTED_SHELLS};
use folio::config::log_path;
use folio::logging::init_logging;
use folio::output::{print_error, print_warning};
use folio::Filter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(
    version,
    about = "A personal portfolio in your terminal",
    after_help = "EXAMPLES:
    # Open the interactive portfolio
    folio

    # List frontend projects as JSON
    folio projects --filter frontend --json

    # Start in the light theme next time
    folio config set theme light

    # Try things out without touching saved preferences
    folio --ephemeral"
)]
struct Cli {
    /// Directory holding preferences.toml and folio.log (default: ~/.config/folio)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Directory holding the profile picture and project screenshots
    #[arg(long, global = true, value_name = "DIR", default_value = folio::assets::DEFAULT_ASSET_DIR)]
    assets: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive portfolio (default)
    #[command(after_help = "KEYS:
    1-5 / Tab      switch section        t       toggle theme
    ←/→            change filter         ↑/↓     move between cards
    Enter          open project details  Esc/q   close or quit
    Mouse clicks work on tabs, chips, cards, buttons, and links.")]
    Show,

    /// Print the project gallery
    Projects {
        /// Only show projects in this category (all, fullstack, frontend, backend)
        #[arg(short, long, default_value = "all")]
        filter: Filter,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print skills with their levels
    Skills,

    /// Show or change stored preferences
    #[command(after_help = "EXAMPLES:
    folio config                    # Show the stored theme and file location
    folio config set theme light    # Persist a theme
    folio config reset              # Forget the stored theme")]
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for (bash, zsh, or fish)
        shell: String,
    },
}

impl Cli {
    fn context(&self) -> Context {
        Context {
            config_dir: self.config_dir.clone(),
            ephemeral: self.ephemeral,
            assets: self.assets.clone(),
        }
    }
}

/// Logging goes to a file so it never scribbles over the TUI.
fn setup_logging(ctx: &Context) {
    if ctx.ephemeral {
        return;
    }
    let result = ctx
        .resolved_config_dir()
        .and_then(|dir| init_logging(&log_path(&dir)));
    if let Err(e) = result {
        print_warning(&format!("logging disabled: {}", e));
    }
}

fn main() {
    let cli = Cli::parse();
    let ctx = cli.context();

    let result = match &cli.command {
        // Completions print to stdout and must stay quiet otherwise
        Some(Commands::Completions { shell }) => match ShellType::from_name(shell) {
            Ok(shell_type) => {
                print_completion_script(shell_type);
                Ok(())
            }
            Err(e) => {
                print_error(&format!(
                    "{}\nSupported shells: {}",
                    e,
                    SUPPORTED_SHELLS.join(", ")
                ));
                std::process::exit(1);
            }
        },

        command => {
            setup_logging(&ctx);
            match command {
                None | Some(Commands::Show) => show_command(&ctx),
                Some(Commands::Projects { filter, json }) => projects_command(*filter, *json),
                Some(Commands::Skills) => skills_command(),
                Some(Commands::Config { subcommand }) => match subcommand {
                    None => config_display_command(&ctx),
                    Some(ConfigSubcommand::Set { key, value }) => {
                        config_set_command(&ctx, key, value)
                    }
                    Some(ConfigSubcommand::Reset) => config_reset_command(&ctx),
                },
                Some(Commands::Completions { .. }) => unreachable!(),
            }
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
