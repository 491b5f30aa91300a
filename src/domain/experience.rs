//! Education and work timeline.

use crate::ui::Icon;

/// Kind of timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceKind {
    Education,
    Work,
}

impl ExperienceKind {
    /// Icon shown on the timeline node.
    pub fn icon(self) -> Icon {
        match self {
            ExperienceKind::Education => Icon::GraduationCap,
            ExperienceKind::Work => Icon::Briefcase,
        }
    }
}

/// A timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub kind: ExperienceKind,
}

/// Timeline entries, oldest first.
pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: 1,
        title: "BCA in Computer Science",
        organization: "Dr. Bhimrao Ambedkar University",
        location: "Agra, India",
        period: "2022 - 2025 (Expected)",
        description: "Pursuing BCA with a strong focus on web development, data structures, and computer fundamentals. Actively working on real-world projects to build practical development skills.",
        kind: ExperienceKind::Education,
    },
    Experience {
        id: 2,
        title: "Weather App – Real-time Weather Info",
        organization: "Personal Project",
        location: "Remote",
        period: "Oct 2024",
        description: "Developed a fully responsive weather app using OpenWeatherMap API. Displays live weather data with dynamic UI updates based on the response.",
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 3,
        title: "News App – Real-time News Aggregator",
        organization: "Personal Project",
        location: "Remote",
        period: "Nov 2024",
        description: "Created a news application with search, category filtering, and dark mode. Integrated News API to fetch real-time articles with an intuitive UI.",
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 4,
        title: "3D Anniversary Gift Site",
        organization: "Personal Project",
        location: "Remote",
        period: "March 2025",
        description: "Built a 3D web gift featuring a double-page photo album, background music, page flip animation, and cinematic ending using Framer Motion and Three.js.",
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 5,
        title: "Sociofy – Social Media App",
        organization: "College Project",
        location: "Remote",
        period: "Jan 2025 – May 2025",
        description: "Engineered a full-stack social media platform with authentication, Google login, post system, dark mode, real-time messaging, notifications, and admin dashboard.",
        kind: ExperienceKind::Work,
    },
];

/// Returns the entries of one kind.
pub fn experiences_of(kind: ExperienceKind) -> Vec<&'static Experience> {
    EXPERIENCES.iter().filter(|e| e.kind == kind).collect()
}

/// Timeline side for the entry at `index`: even entries sit on the left.
pub fn is_left_aligned(index: usize) -> bool {
    index % 2 == 0
}
