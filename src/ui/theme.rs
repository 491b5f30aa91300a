//! Color palettes for light and dark mode.

/// Semantic colors, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub card_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

impl ThemeColors {
    /// Light palette (indigo-600 primary).
    pub const fn light() -> Self {
        Self {
            background: "#ffffff",
            background_secondary: "#f9fafb",
            card_bg: "#ffffff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            primary: "#4f46e5",
            primary_hover: "#4338ca",
            accent: "#e5e7eb",
            accent_hover: "#d1d5db",
            border: "#e5e7eb",
            success: "#10b981",
            error: "#ef4444",
            warning: "#f59e0b",
        }
    }

    /// Dark palette (indigo-400 primary).
    pub const fn dark() -> Self {
        Self {
            background: "#111827",
            background_secondary: "#1f2937",
            card_bg: "#1f2937",
            text: "#f9fafb",
            text_secondary: "#9ca3af",
            primary: "#818cf8",
            primary_hover: "#6366f1",
            accent: "#374151",
            accent_hover: "#4b5563",
            border: "#374151",
            success: "#34d399",
            error: "#f87171",
            warning: "#fbbf24",
        }
    }

    /// Palette for the given theme flag.
    pub const fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// `(name, value)` pairs for CSS custom properties.
    pub fn variables(&self) -> [(&'static str, &'static str); 13] {
        [
            ("--background", self.background),
            ("--backgroundSecondary", self.background_secondary),
            ("--cardBg", self.card_bg),
            ("--text", self.text),
            ("--textSecondary", self.text_secondary),
            ("--primary", self.primary),
            ("--primaryHover", self.primary_hover),
            ("--accent", self.accent),
            ("--accentHover", self.accent_hover),
            ("--border", self.border),
            ("--success", self.success),
            ("--error", self.error),
            ("--warning", self.warning),
        ]
    }
}

/// The active theme as handed to rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub const fn new(is_dark: bool) -> Self {
        Self {
            is_dark,
            colors: ThemeColors::for_mode(is_dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_palette() {
        assert_eq!(Theme::new(true).colors, ThemeColors::dark());
        assert_eq!(Theme::new(false).colors, ThemeColors::light());
    }

    #[test]
    fn variables_cover_palette() {
        let vars = ThemeColors::dark().variables();
        assert_eq!(vars[0], ("--background", "#111827"));
        assert!(vars.iter().all(|(name, value)| name.starts_with("--") && value.starts_with('#')));
    }
}
