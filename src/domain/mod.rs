//! Static content tables.
//!
//! Everything here is immutable and compiled in; views read it together with
//! the current theme flag.

pub mod achievements;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod social;

pub use achievements::{
    achievement_stats, achievements_in, Achievement, AchievementCategory, AchievementStats,
    ACHIEVEMENTS,
};
pub use experience::{experiences_of, Experience, ExperienceKind, EXPERIENCES};
pub use projects::{featured_projects, find_project, projects_using, Project, PROJECTS};
pub use skills::{
    all_skills, find_category, find_skill, skills_at, Skill, SkillCategory, SkillLevel,
    SKILL_CATEGORIES,
};
pub use social::{SocialLink, SOCIAL_LINKS};

/// Default length for card descriptions.
pub const DEFAULT_TRUNCATE: usize = 150;

/// Shortens `text` to at most `max_chars` characters, adding `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("App – Real", 5), "App –...");
    }
}
