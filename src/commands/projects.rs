//! Projects command handler.
//!
//! Prints the gallery under a filter, as text or JSON.

use crate::catalog::{ProjectRecord, PROJECTS};
use crate::error::Result;
use crate::filter::{filter_projects, Filter};
use crate::output::print_project_list;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProjectListing<'a> {
    filter: Filter,
    count: usize,
    projects: Vec<&'a ProjectRecord>,
}

/// The filtered gallery as pretty-printed JSON.
pub fn projects_json(filter: Filter) -> Result<String> {
    let projects = filter_projects(PROJECTS, filter);
    let listing = ProjectListing {
        filter,
        count: projects.len(),
        projects,
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

/// Print the projects visible under `filter`.
pub fn projects_command(filter: Filter, json: bool) -> Result<()> {
    tracing::debug!(filter = %filter, json, "listing projects");
    if json {
        println!("{}", projects_json(filter)?);
    } else {
        print_project_list(filter, &filter_projects(PROJECTS, filter));
    }
    Ok(())
}
