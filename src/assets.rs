//! Image assets: the profile picture and one screenshot per project.
//!
//! The terminal can't show the pictures, but it can say whether they are
//! there. Assets are probed once at startup; a missing or broken file turns
//! into a placeholder instead of an error.

use crate::catalog::{ProjectRecord, Profile};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default asset root, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Available { width: u32, height: u32 },
    Missing,
    Unreadable(String),
}

impl AssetStatus {
    /// Probe an image file.
    pub fn probe(path: &Path) -> AssetStatus {
        if !path.exists() {
            return AssetStatus::Missing;
        }
        match image::image_dimensions(path) {
            Ok((width, height)) => AssetStatus::Available { width, height },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable image asset");
                AssetStatus::Unreadable(e.to_string())
            }
        }
    }

    /// Short description for display next to a card or profile.
    pub fn describe(&self) -> String {
        match self {
            AssetStatus::Available { width, height } => format!("{width}×{height} png"),
            AssetStatus::Missing => "[image missing]".to_string(),
            AssetStatus::Unreadable(_) => "[image unreadable]".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AssetStatus::Available { .. })
    }
}

static MISSING: AssetStatus = AssetStatus::Missing;

/// Probed status of every asset the portfolio references.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
    profile: AssetStatus,
    projects: HashMap<u32, AssetStatus>,
}

impl AssetLibrary {
    /// Probe the profile image and every project screenshot under `root`.
    pub fn scan(root: &Path, profile: &Profile, projects: &[ProjectRecord]) -> Self {
        let profile_status = AssetStatus::probe(&root.join(profile.image));
        let projects = projects
            .iter()
            .map(|p| (p.id, AssetStatus::probe(&root.join(p.image_file()))))
            .collect();
        let library = Self {
            root: root.to_path_buf(),
            profile: profile_status,
            projects,
        };
        tracing::debug!(
            root = %root.display(),
            available = library.available_count(),
            "assets scanned"
        );
        library
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile(&self) -> &AssetStatus {
        &self.profile
    }

    /// Status of a project's screenshot. Unknown ids count as missing.
    pub fn project(&self, id: u32) -> &AssetStatus {
        self.projects.get(&id).unwrap_or(&MISSING)
    }

    fn available_count(&self) -> usize {
        self.projects.values().filter(|s| s.is_available()).count()
            + usize::from(self.profile.is_available())
    }
}
