//! Portfolio projects.

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    live_url: &'static str,
    github_url: &'static str,
    pub featured: bool,
}

/// Placeholder used for links that do not exist yet.
const NO_LINK: &str = "#";

impl Project {
    /// Returns the deployed site, if there is one.
    pub fn live_url(&self) -> Option<&'static str> {
        Some(self.live_url).filter(|url| *url != NO_LINK)
    }

    /// Returns the repository, if public.
    pub fn github_url(&self) -> Option<&'static str> {
        Some(self.github_url).filter(|url| *url != NO_LINK)
    }

    /// Returns whether the project lists `tech`, ignoring case.
    pub fn uses(&self, tech: &str) -> bool {
        self.tech.iter().any(|t| t.eq_ignore_ascii_case(tech))
    }
}

/// All projects in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Social Media App",
        description: "Sociofy is a full-stack social media web application built using the MERN stack, TailwindCSS, and DaisyUI. It features user authentication (JWT & Google login), post creation with images, like/comment functionalities, and real-time messaging and notifications. The admin panel includes dynamic user/post/notification management with charts and visual analytics.",
        image: "/sociofy.png",
        tech: &["React.js", "Express.js", "MongoDB", "Tailwind CSS", "Zustand", "Redis", "JWT Auth"],
        live_url: NO_LINK,
        github_url: "https://github.com/Abhii-bhardwaj/Sociofy",
        featured: true,
    },
    Project {
        id: 2,
        title: "3D Anniversary Website",
        description: "A fully responsive 3D anniversary website crafted using Three.js, React, and TailwindCSS. It features a romantic landing page with a typewriter message and a smooth transition to a dynamic 3D scene with a rotating camera, an interactive 3D heart, a photo frame and a 3D photo album.",
        image: "/anniversary-site.png",
        tech: &["React.js", "Tailwind CSS", "Three.js", "Framer Motion"],
        live_url: "https://anniversary-website-rho.vercel.app/",
        github_url: "https://github.com/Abhii-bhardwaj/Anniversary-website",
        featured: true,
    },
    Project {
        id: 3,
        title: "News Application",
        description: "A dynamic news aggregator web application developed using React and NewsAPI. It provides real-time news updates across technology, business, health and sports, with a search bar, category filters, dark mode and infinite scroll.",
        image: "/api/placeholder/600/400",
        tech: &["React.js", "Tailwind CSS", "NewsAPI", "Zustand"],
        live_url: NO_LINK,
        github_url: NO_LINK,
        featured: true,
    },
    Project {
        id: 4,
        title: "Weather Forecast App",
        description: "A responsive weather forecasting web app built using React and the OpenWeatherMap API. It shows temperature, humidity, wind speed and conditions for any city, with animated icons and handled error states.",
        image: "/weather-app.png",
        tech: &["React.js", "Styled Components", "OpenWeather API"],
        live_url: "https://abhii-weather-app.netlify.app/",
        github_url: "https://github.com/Abhii-bhardwaj/Weather_App",
        featured: false,
    },
];

/// Finds a project by id.
pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Returns the featured projects.
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Returns the projects built with `tech`.
pub fn projects_using(tech: &str) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.uses(tech)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_links_are_absent() {
        let news = find_project(3).unwrap();
        assert_eq!(news.live_url(), None);
        assert_eq!(news.github_url(), None);

        let weather = find_project(4).unwrap();
        assert_eq!(weather.live_url(), Some("https://abhii-weather-app.netlify.app/"));
    }

    #[test]
    fn filters() {
        let featured: Vec<_> = featured_projects().iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![1, 2, 3]);

        let three: Vec<_> = projects_using("three.js").iter().map(|p| p.id).collect();
        assert_eq!(three, vec![2]);

        assert!(find_project(99).is_none());
    }
}
