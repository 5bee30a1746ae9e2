// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: projects shown in the carousel and skill bars.

/// One carousel slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Trailhead",
        summary: "Offline-first hiking planner with elevation profiles and GPX export.",
        stack: &["Rust", "SQLite", "Iced"],
    },
    Project {
        title: "Ledgerline",
        summary: "Double-entry bookkeeping service with an append-only audit log.",
        stack: &["Rust", "PostgreSQL", "Axum"],
    },
    Project {
        title: "Pixel Pantry",
        summary: "Recipe manager that scales ingredient lists and builds shopping lists.",
        stack: &["TypeScript", "React", "IndexedDB"],
    },
    Project {
        title: "Beacon",
        summary: "Uptime monitor pushing alerts over WebSockets to a live dashboard.",
        stack: &["Go", "Redis", "WebSockets"],
    },
    Project {
        title: "Quillcast",
        summary: "Markdown blog engine generating static pages with full-text search.",
        stack: &["Rust", "Tantivy", "HTML"],
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &[
            Skill { name: "Rust", level: 90 },
            Skill { name: "TypeScript", level: 80 },
            Skill { name: "Go", level: 65 },
        ],
    },
    SkillCategory {
        name: "Frameworks",
        skills: &[
            Skill { name: "Iced", level: 85 },
            Skill { name: "React", level: 75 },
            Skill { name: "Axum", level: 70 },
        ],
    },
    SkillCategory {
        name: "Tooling",
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "Docker", level: 70 },
            Skill { name: "PostgreSQL", level: 75 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!PROJECTS.is_empty());
        assert!(SKILLS.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILLS {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
            }
        }
    }
}
