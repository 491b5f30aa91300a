//! Social profile links.

use crate::ui::Icon;

/// A link in the header, footer and contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    hover_dark: &'static str,
    hover_light: &'static str,
}

impl SocialLink {
    /// Hover background class for the active theme.
    pub fn hover_class(&self, is_dark: bool) -> &'static str {
        if is_dark {
            self.hover_dark
        } else {
            self.hover_light
        }
    }

    /// Returns whether the link opens a mail client.
    pub fn is_mail(&self) -> bool {
        self.url.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/Abhii-bhardwaj/",
        icon: Icon::Github,
        hover_dark: "hover:bg-gray-700",
        hover_light: "hover:bg-gray-100",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/abhishek-bhardwaj-31513b279",
        icon: Icon::Linkedin,
        hover_dark: "hover:bg-blue-900/50",
        hover_light: "hover:bg-blue-100",
    },
    SocialLink {
        name: "Twitter",
        url: "https://x.com/M_AbhiBhardwaj",
        icon: Icon::Twitter,
        hover_dark: "hover:bg-sky-900/50",
        hover_light: "hover:bg-sky-100",
    },
    SocialLink {
        name: "Email",
        url: "mailto:abhibhardwaj622@gmail.com",
        icon: Icon::Mail,
        hover_dark: "hover:bg-green-900/50",
        hover_light: "hover:bg-green-100",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_depends_on_theme() {
        let github = &SOCIAL_LINKS[0];
        assert_eq!(github.hover_class(true), "hover:bg-gray-700");
        assert_eq!(github.hover_class(false), "hover:bg-gray-100");
    }

    #[test]
    fn only_email_is_mailto() {
        let mail: Vec<_> = SOCIAL_LINKS.iter().filter(|l| l.is_mail()).map(|l| l.name).collect();
        assert_eq!(mail, vec!["Email"]);
    }
}
