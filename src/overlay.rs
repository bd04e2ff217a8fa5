//! The project detail overlay.
//!
//! Two states: closed, or open on exactly one project. Opening replaces
//! whatever was open; closing always leaves nothing selected.

use crate::catalog::ProjectRecord;

/// How the overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The dedicated close control (`ⓧ`, `x`, `Esc`).
    Control,
    /// A click outside the overlay content.
    Backdrop,
}

/// Which of a project's outbound links to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Live,
    Repo,
}

impl ProjectLink {
    pub fn label(self) -> &'static str {
        match self {
            ProjectLink::Live => "Live",
            ProjectLink::Repo => "Repo",
        }
    }

    pub fn url(self, project: &ProjectRecord) -> &'static str {
        match self {
            ProjectLink::Live => project.live,
            ProjectLink::Repo => project.repo,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    selected: Option<&'static ProjectRecord>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `project`.
    pub fn open(&mut self, project: &'static ProjectRecord) {
        tracing::debug!(project = project.id, title = project.title, "detail overlay opened");
        self.selected = Some(project);
    }

    /// Close the overlay. Returns the project that was showing, if any.
    pub fn close(&mut self, reason: CloseReason) -> Option<&'static ProjectRecord> {
        let closed = self.selected.take();
        if let Some(project) = closed {
            tracing::debug!(project = project.id, ?reason, "detail overlay closed");
        }
        closed
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&'static ProjectRecord> {
        self.selected
    }
}
