//! Typing animation for the hero headline.
//!
//! Types a role one character at a time, holds it, deletes it, then moves to
//! the next role. Driven by [`Typewriter::tick`], which returns how long to
//! wait before the next tick.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

/// Roles cycled in the hero section.
pub const HERO_ROLES: &[&str] = &[
    "Frontend Developer",
    "React Specialist",
    "UI/UX Enthusiast",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: &'static [&'static str],
    role: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the role being typed.
    pub fn role_index(&self) -> usize {
        self.role
    }

    /// Currently visible text.
    pub fn text(&self) -> &'static str {
        let Some(role) = self.roles.get(self.role) else {
            return "";
        };
        match role.char_indices().nth(self.shown) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    /// Advances one step and returns the delay before the next one.
    pub fn tick(&mut self) -> Duration {
        let Some(role) = self.roles.get(self.role) else {
            return TYPE_DELAY;
        };
        let full = role.chars().count();

        match self.phase {
            Phase::Typing if self.shown < full => {
                self.shown += 1;
                if self.shown == full {
                    self.phase = Phase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Typing | Phase::Holding => {
                self.phase = Phase::Deleting;
                DELETE_DELAY
            }
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                DELETE_DELAY
            }
            Phase::Deleting => {
                self.phase = Phase::Typing;
                self.role = (self.role + 1) % self.roles.len();
                TYPE_DELAY
            }
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(HERO_ROLES)
    }
}
