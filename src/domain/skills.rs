//! Skills grouped by category.

use crate::ui::Icon;

/// Self-assessed proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    /// Parses a label, ignoring case.
    pub fn parse(label: &str) -> Option<SkillLevel> {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }
}

/// A single skill badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
    /// Badge background utility class.
    pub color: &'static str,
    pub level: SkillLevel,
}

/// A group of related skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, icon: Icon, color: &'static str, level: SkillLevel) -> Skill {
    Skill {
        name,
        icon,
        color,
        level,
    }
}

use SkillLevel::{Advanced, Beginner, Intermediate};

const FRONTEND: &[Skill] = &[
    skill("React.js", Icon::Atom, "bg-blue-500", Advanced),
    skill("Next.js", Icon::Triangle, "bg-blue-500", Intermediate),
    skill("JavaScript (ES6+)", Icon::FileCode, "bg-yellow-400", Advanced),
    skill("TypeScript", Icon::FileType, "bg-blue-700", Intermediate),
    skill("HTML5", Icon::Code, "bg-orange-500", Advanced),
    skill("CSS3", Icon::LayoutTemplate, "bg-blue-400", Advanced),
];

const STYLING: &[Skill] = &[
    skill("Tailwind CSS", Icon::Paintbrush, "bg-cyan-500", Advanced),
    skill("Shadcn/ui", Icon::Palette, "bg-gray-700", Intermediate),
    skill("Framer Motion", Icon::Move3D, "bg-pink-500", Intermediate),
    skill("Responsive Design", Icon::Smartphone, "bg-green-500", Advanced),
];

const BACKEND: &[Skill] = &[
    skill("Node.js & Express", Icon::Hexagon, "bg-lime-600", Intermediate),
    skill("MongoDB", Icon::Database, "bg-green-600", Intermediate),
    skill("REST APIs", Icon::PlugZap, "bg-indigo-600", Intermediate),
    skill("WebSockets", Icon::Wifi, "bg-green-700", Beginner),
    skill("JWT", Icon::Key, "bg-orange-600", Intermediate),
];

const TOOLS: &[Skill] = &[
    skill("Zustand", Icon::Settings2, "bg-gray-600", Intermediate),
    skill("Git & GitHub", Icon::Github, "bg-red-500", Advanced),
    skill("Thunder Client", Icon::Zap, "bg-purple-600", Advanced),
    skill("Postman", Icon::Zap, "bg-purple-600", Intermediate),
];

const DEVOPS: &[Skill] = &[
    skill("Vercel", Icon::Globe, "bg-black", Intermediate),
    skill("Docker", Icon::Container, "bg-blue-700", Beginner),
];

const TESTING: &[Skill] = &[
    skill("Jest", Icon::TestTube, "bg-red-600", Beginner),
    skill("ESLint", Icon::CheckCircle, "bg-blue-500", Intermediate),
];

const GRAPHICS: &[Skill] = &[
    skill("Three.js", Icon::Box, "bg-slate-700", Intermediate),
    skill("Image Optimization", Icon::ImagePlus, "bg-amber-600", Intermediate),
];

/// All categories in display order.
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend Development",
        icon: Icon::Monitor,
        color: "bg-blue-600",
        skills: FRONTEND,
    },
    SkillCategory {
        name: "Styling & UI",
        icon: Icon::Paintbrush2,
        color: "bg-pink-600",
        skills: STYLING,
    },
    SkillCategory {
        name: "Backend & APIs",
        icon: Icon::Server,
        color: "bg-green-600",
        skills: BACKEND,
    },
    SkillCategory {
        name: "Development Tools",
        icon: Icon::Wrench,
        color: "bg-purple-600",
        skills: TOOLS,
    },
    SkillCategory {
        name: "DevOps & Deployment",
        icon: Icon::Cloud,
        color: "bg-gray-600",
        skills: DEVOPS,
    },
    SkillCategory {
        name: "Testing & Quality",
        icon: Icon::Bug,
        color: "bg-red-600",
        skills: TESTING,
    },
    SkillCategory {
        name: "Graphics & Media",
        icon: Icon::Image,
        color: "bg-amber-600",
        skills: GRAPHICS,
    },
];

/// Iterates over every skill, category by category.
pub fn all_skills() -> impl Iterator<Item = &'static Skill> {
    SKILL_CATEGORIES.iter().flat_map(|c| c.skills.iter())
}

/// Finds a skill by name, ignoring case.
pub fn find_skill(name: &str) -> Option<&'static Skill> {
    all_skills().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Finds a category by name, ignoring case.
pub fn find_category(name: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Returns the skills at exactly `level`.
pub fn skills_at(level: SkillLevel) -> Vec<&'static Skill> {
    all_skills().filter(|s| s.level == level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(SKILL_CATEGORIES.len(), 7);
        assert_eq!(all_skills().count(), 25);
    }

    #[test]
    fn lookup_ignores_case() {
        let skill = find_skill("tailwind css").unwrap();
        assert_eq!(skill.icon, Icon::Paintbrush);
        assert_eq!(skill.level, SkillLevel::Advanced);
        assert!(find_skill("COBOL").is_none());

        assert_eq!(find_category("devops & deployment").unwrap().skills.len(), 2);
    }

    #[test]
    fn level_filter() {
        let beginner: Vec<_> = skills_at(SkillLevel::Beginner)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(beginner, vec!["WebSockets", "Docker", "Jest"]);
    }

    #[test]
    fn level_labels() {
        assert_eq!(SkillLevel::parse(" Advanced "), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("expert"), None);
        assert_eq!(SkillLevel::Intermediate.label(), "Intermediate");
    }
}
