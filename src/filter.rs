//! Gallery filtering.

use crate::catalog::{ProjectRecord, ProjectTag};
use crate::error::{FolioError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The filter chips above the projects gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Filter {
    #[default]
    All,
    Fullstack,
    Frontend,
    Backend,
}

impl Filter {
    /// Every filter, in chip order.
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Fullstack,
        Filter::Frontend,
        Filter::Backend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Fullstack => "Fullstack",
            Filter::Frontend => "Frontend",
            Filter::Backend => "Backend",
        }
    }

    /// The tag this filter narrows to, `None` for [`Filter::All`].
    pub fn tag(self) -> Option<ProjectTag> {
        match self {
            Filter::All => None,
            Filter::Fullstack => Some(ProjectTag::Fullstack),
            Filter::Frontend => Some(ProjectTag::Frontend),
            Filter::Backend => Some(ProjectTag::Backend),
        }
    }

    /// Whether a project is shown under this filter.
    pub fn matches(self, project: &ProjectRecord) -> bool {
        match self.tag() {
            None => true,
            Some(tag) => project.tag == tag,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next chip to the right, wrapping around.
    pub fn next(self) -> Filter {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Next chip to the left, wrapping around.
    pub fn prev(self) -> Filter {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl From<ProjectTag> for Filter {
    fn from(tag: ProjectTag) -> Self {
        match tag {
            ProjectTag::Fullstack => Filter::Fullstack,
            ProjectTag::Frontend => Filter::Frontend,
            ProjectTag::Backend => Filter::Backend,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Filter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        Filter::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FolioError::UnknownFilter(s.to_string()))
    }
}

/// Projects visible under `filter`, in catalog order.
pub fn filter_projects(catalog: &[ProjectRecord], filter: Filter) -> Vec<&ProjectRecord> {
    catalog.iter().filter(|p| filter.matches(p)).collect()
}
