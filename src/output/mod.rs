//! Plain terminal output for the non-interactive subcommands.
//!
//! - [`messages`] - Error, warning, and success messages
//! - [`catalog`] - Project and skill listings

pub mod catalog;
pub mod messages;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use catalog::{
    format_project, make_level_bar, print_project_list, print_skill_list,
};
pub use messages::{print_error, print_success, print_warning};
