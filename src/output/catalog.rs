//! Project and skill listings for `folio projects` and `folio skills`.

use super::colors::*;
use crate::catalog::{ProjectRecord, SkillRecord};
use crate::filter::Filter;

/// Width of the bar in `folio skills`.
pub const LEVEL_BAR_WIDTH: usize = 30;

/// A `level`% bar, `width` cells wide.
pub fn make_level_bar(level: u8, width: usize) -> String {
    let filled = usize::from(level.min(100)) * width / 100;
    let empty = width - filled;
    format!(
        "{GREEN}{}{RESET}{GRAY}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

/// One project as an indented block.
pub fn format_project(project: &ProjectRecord) -> String {
    format!(
        "  {BOLD}{}{RESET} {MAGENTA}[{}]{RESET}\n    {}\n    {GRAY}{}{RESET}\n    {CYAN}live{RESET} {}\n    {CYAN}repo{RESET} {}",
        project.title,
        project.tag,
        project.desc,
        project.tech.join(" · "),
        project.live,
        project.repo,
    )
}

/// Print the gallery under a filter.
pub fn print_project_list(filter: Filter, projects: &[&ProjectRecord]) {
    println!("{BOLD}Projects{RESET} {GRAY}(filter: {}){RESET}", filter);
    println!();

    if projects.is_empty() {
        println!("{GRAY}No projects in this category yet.{RESET}");
        return;
    }

    for project in projects {
        println!("{}", format_project(project));
        println!();
    }
    println!(
        "{GRAY}({} project{}){RESET}",
        projects.len(),
        if projects.len() == 1 { "" } else { "s" }
    );
}

/// Print every skill with a level bar.
pub fn print_skill_list(skills: &[SkillRecord]) {
    let name_width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);
    println!("{BOLD}Skills{RESET}");
    println!();
    for skill in skills {
        println!(
            "  {:<width$}  {}  {:>3}%",
            skill.name,
            make_level_bar(skill.level, LEVEL_BAR_WIDTH),
            skill.level,
            width = name_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PROJECTS, SKILLS};

    #[test]
    fn test_level_bar_proportions() {
        let bar = make_level_bar(50, 10);
        assert_eq!(bar.matches('█').count(), 5);
        assert_eq!(bar.matches('░').count(), 5);
    }

    #[test]
    fn test_level_bar_extremes() {
        assert_eq!(make_level_bar(0, 8).matches('█').count(), 0);
        assert_eq!(make_level_bar(100, 8).matches('█').count(), 8);
        assert_eq!(make_level_bar(250, 8).matches('█').count(), 8);
    }

    #[test]
    fn test_format_project_includes_details() {
        let text = format_project(&PROJECTS[1]);
        assert!(text.contains("Fanrong Website"));
        assert!(text.contains("[Frontend]"));
        assert!(text.contains("React · TailwindCSS"));
        assert!(text.contains("https://fanrong.vercel.app/"));
    }

    #[test]
    fn test_print_lists_smoke() {
        let all: Vec<&ProjectRecord> = PROJECTS.iter().collect();
        print_project_list(Filter::All, &all);
        print_project_list(Filter::Backend, &[]);
        print_skill_list(SKILLS);
    }
}
