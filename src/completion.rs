//! Shell completion scripts for folio.
//!
//! `folio completions <shell>` prints a script for bash, zsh, or fish. The
//! command tree is built by hand here so it can be generated without going
//! through the binary's `Cli` type.

use crate::error::{FolioError, Result};
use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate, Shell};
use std::io::Write;

/// Shell names accepted by `folio completions`.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Parse a shell name, or a path such as `/usr/bin/zsh`.
    pub fn from_name(name: &str) -> Result<ShellType> {
        let base = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match base.to_ascii_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(FolioError::ShellCompletion(format!(
                "Unsupported shell: '{}'",
                base
            ))),
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The folio command tree, mirroring `main.rs`.
fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A personal portfolio in your terminal")
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding preferences.toml and folio.log")
                .global(true)
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .help("Keep preferences in memory only")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .help("Directory holding the profile picture and project screenshots")
                .global(true)
                .default_value("images")
                .value_hint(ValueHint::DirPath),
        )
        .subcommand(Command::new("show").about("Open the interactive portfolio (default)"))
        .subcommand(
            Command::new("projects")
                .about("Print the project gallery")
                .arg(
                    Arg::new("filter")
                        .short('f')
                        .long("filter")
                        .help("Only show projects in this category")
                        .value_parser(["all", "fullstack", "frontend", "backend"])
                        .default_value("all"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print JSON instead of text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("skills").about("Print skills with their levels"))
        .subcommand(
            Command::new("config")
                .about("Show or change stored preferences")
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(Arg::new("key").required(true).value_parser(["theme"]))
                        .arg(
                            Arg::new("value")
                                .required(true)
                                .value_parser(["dark", "light"]),
                        ),
                )
                .subcommand(
                    Command::new("reset").about("Remove stored preferences so defaults apply again"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Output shell completion script to stdout")
                .hide(true)
                .arg(Arg::new("shell").required(true).value_parser(["bash", "zsh", "fish"])),
        )
}

/// Generate a completion script for `shell`.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = build_cli();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "folio", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Print a completion script to stdout.
pub fn print_completion_script(shell: ShellType) {
    let script = generate_completion_script(shell);
    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(script.as_bytes()) {
        tracing::warn!(error = %e, "failed to write completion script");
    }
}
