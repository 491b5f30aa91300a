//! Achievements and certifications.

/// Who issued an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Freelance,
    LetUpgrade,
    Academic,
}

impl AchievementCategory {
    pub fn label(self) -> &'static str {
        match self {
            AchievementCategory::Freelance => "Freelance",
            AchievementCategory::LetUpgrade => "LetUpgrade",
            AchievementCategory::Academic => "Academic",
        }
    }
}

/// A card in the achievements carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub count: &'static str,
    pub category: AchievementCategory,
    pub gradient: &'static str,
    pub certificate_image: Option<&'static str>,
    pub certificate_link: Option<&'static str>,
}

impl Achievement {
    /// Returns whether a certificate can be opened.
    pub fn has_certificate(&self) -> bool {
        self.certificate_link.is_some()
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "Freelance project delivered",
        description: "Designed and developed a 3D anniversary website using Three.js and React.js, featuring interactive 3D animations, responsive design, and a memorable experience for a special occasion.",
        emoji: "🎉",
        count: "1",
        category: AchievementCategory::Freelance,
        gradient: "from-purple-500 to-pink-500",
        certificate_image: None,
        certificate_link: None,
    },
    Achievement {
        id: 2,
        title: "HTML & CSS Mastery",
        description: "Completed comprehensive HTML & CSS certification from LetUpgrade, mastering responsive design principles, modern layouts, and advanced styling techniques.",
        emoji: "🎨",
        count: "Certified",
        category: AchievementCategory::LetUpgrade,
        gradient: "from-green-500 to-emerald-500",
        certificate_image: Some("./HTML.png"),
        certificate_link: Some("https://drive.google.com/file/d/1XA-45F4FunhsS2CJhpyAQoeTowWPa2rE/view?usp=drive_link"),
    },
    Achievement {
        id: 3,
        title: "Tailwind CSS Proficiency",
        description: "Achieved Tailwind CSS certification from LetUpgrade, mastering the utility-first CSS framework, responsive design patterns, and modern styling approaches.",
        emoji: "🎨",
        count: "Certified",
        category: AchievementCategory::LetUpgrade,
        gradient: "from-cyan-500 to-blue-500",
        certificate_image: Some("./Tailwind.png"),
        certificate_link: Some("https://drive.google.com/file/d/1r6ukbZaj5NaPR7NDAoYIAeni2cpHsFz6/view?usp=drive_link"),
    },
    Achievement {
        id: 4,
        title: "React.js Expertise",
        description: "Earned React.js certification from LetUpgrade, specializing in component-based development, hooks, state management, and performance optimization.",
        emoji: "⚛️",
        count: "Certified",
        category: AchievementCategory::LetUpgrade,
        gradient: "from-blue-400 to-cyan-400",
        certificate_image: Some("./React.png"),
        certificate_link: Some("https://drive.google.com/file/d/16AA_rQ2Ip7-VISBVfQBoKzsK7XJBNjX_/view?usp=drive_link"),
    },
];

/// Headline numbers shown under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementStats {
    pub total_projects: usize,
    pub certifications: usize,
    pub academic_status: &'static str,
}

/// Computes the stats from the table.
pub fn achievement_stats() -> AchievementStats {
    AchievementStats {
        total_projects: achievements_in(AchievementCategory::Freelance).len(),
        certifications: ACHIEVEMENTS.iter().filter(|a| a.has_certificate()).count(),
        academic_status: "Graduate",
    }
}

/// Returns the achievements in `category`.
pub fn achievements_in(category: AchievementCategory) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
