pub mod assets;
pub mod catalog;
pub mod commands;
pub mod completion;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod links;
pub mod logging;
pub mod output;
pub mod overlay;
pub mod skills;
pub mod storage;
pub mod theme;
pub mod tui;

pub use catalog::{ProjectRecord, SkillRecord, PROFILE, PROJECTS, SKILLS};
pub use error::{FolioError, Result};
pub use filter::Filter;
pub use theme::{Theme, ThemeController};
