//! The portfolio's content: projects, skills, and the profile.
//!
//! All of it is fixed at compile time. Nothing here is ever mutated or
//! loaded, so the rest of the crate hands out `&'static` references freely.

use serde::Serialize;
use std::fmt;

/// Category a project belongs to.
///
/// There is deliberately no `All` variant: "all" is a filter, never a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectTag {
    Fullstack,
    Frontend,
    Backend,
}

impl ProjectTag {
    pub fn label(self) -> &'static str {
        match self {
            ProjectTag::Fullstack => "Fullstack",
            ProjectTag::Frontend => "Frontend",
            ProjectTag::Backend => "Backend",
        }
    }
}

impl fmt::Display for ProjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry in the projects gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Unique id; also names the screenshot asset (`<id>.png`).
    pub id: u32,
    pub title: &'static str,
    pub tag: ProjectTag,
    pub desc: &'static str,
    /// Technologies in display order.
    pub tech: &'static [&'static str],
    /// Live demo URL.
    pub live: &'static str,
    /// Source repository URL.
    pub repo: &'static str,
}

impl ProjectRecord {
    /// Filename of the project's screenshot.
    pub fn image_file(&self) -> String {
        format!("{}.png", self.id)
    }
}

/// A skill and its self-assessed level in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
}

impl SkillRecord {
    /// Level as a fraction of a full circle.
    pub fn fraction(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

/// An outbound social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub logo: &'static str,
    pub tagline: &'static str,
    pub open_to: &'static [&'static str],
    pub about: &'static str,
    pub background: &'static str,
    pub values: &'static [&'static str],
    pub quick_facts: &'static [&'static str],
    pub contact_pitch: &'static str,
    pub email: &'static str,
    pub socials: &'static [SocialLink],
    /// Profile picture filename inside the asset root.
    pub image: &'static str,
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "AI Resume Analyzer",
        tag: ProjectTag::Fullstack,
        desc: "An AI-powered tool that evaluates resumes and gives structured feedback on strengths and areas to improve.",
        tech: &["React", "TailwindCSS", "Typescript", "Puter.js"],
        live: "https://puter.com/app/resume-analyzer-19",
        repo: "https://github.com/hadeexo/Resume-analyzer",
    },
    ProjectRecord {
        id: 2,
        title: "Fanrong Website",
        tag: ProjectTag::Frontend,
        desc: "A modern corporate website for an investment firm, featuring responsive layouts and sleek UI components.",
        tech: &["React", "TailwindCSS"],
        live: "https://fanrong.vercel.app/",
        repo: "https://github.com/hadeexo/Fanrong-Holdings",
    },
    ProjectRecord {
        id: 3,
        title: "E-commerce Website",
        tag: ProjectTag::Frontend,
        desc: "An online sneaker store with product listings, search, and a cart flow, designed for a smooth shopping experience.",
        tech: &["React", "SketchFab", "TailwindCSS", "OpenAI"],
        live: "https://sneakers-sable-nine.vercel.app/",
        repo: "https://github.com/hadeexo/Sneakers",
    },
];

pub static SKILLS: &[SkillRecord] = &[
    SkillRecord { name: "JavaScript", level: 85 },
    SkillRecord { name: "React", level: 95 },
    SkillRecord { name: "Tailwind CSS", level: 98 },
    SkillRecord { name: "Node.js", level: 77 },
    SkillRecord { name: "Typescript", level: 85 },
    SkillRecord { name: "NextJs", level: 95 },
    SkillRecord { name: "Wordpress", level: 91 },
    SkillRecord { name: "Mongo DB", level: 77 },
];

pub static PROFILE: Profile = Profile {
    name: "Adekunle",
    logo: "ᕼλᕲƐ",
    tagline: "I build modern, responsive websites for brands and growing businesses focused on growth and visibility.",
    open_to: &["Full-time", "Freelance", "Collaborations"],
    about: "I'm a web developer passionate about transforming ideas into fast, interactive, and visually polished web experiences. I write clean, efficient code and craft smooth, user-focused designs. Beyond coding, I'm constantly exploring design inspiration, sketching UI concepts, or unwinding on the basketball court.",
    background: "Blending code and creativity, from building responsive UIs to optimizing performance. Always chasing clean logic and smoother user experiences.",
    values: &[
        "Clean, readable code, like a perfect assist",
        "Seamless, intuitive UX that just flows",
        "Performance & reliability, even in overtime",
    ],
    quick_facts: &[
        "Lagos, Nigeria",
        "Learning Computer Engineering",
        "Open to remote & on-site roles",
    ],
    contact_pitch: "If you like my work, let's talk. I'm open to full-time roles, freelance projects, and collaborations.",
    email: "adekunletayo824@gmail.com",
    socials: &[
        SocialLink {
            network: "Instagram",
            handle: "@hadee.xo",
            url: "https://instagram.com/hadee.xo",
        },
        SocialLink {
            network: "X",
            handle: "@hade_xo",
            url: "https://x.com/hade_xo",
        },
        SocialLink {
            network: "GitHub",
            handle: "github.com/hadeexo",
            url: "https://github.com/hadeexo",
        },
    ],
    image: "my3.png",
};

/// Look up a project by id.
pub fn find_project(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}
