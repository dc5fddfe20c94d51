//! Static page content: navigation, stats, skills, projects, and socials.
//!
//! DESIGN
//! ======
//! Everything the page renders verbatim lives here as `const` tables so the
//! components stay pure layout and the content can be checked by tests.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Shamod Oshan";
pub const BRAND: &str = "SHAMOD OSHAN";
pub const COPYRIGHT: &str = "\u{a9} 2025 Shamod Oshan. All rights reserved.";
pub const REPOSITORIES_URL: &str = "https://github.com/Shamodoshan?tab=repositories";

pub const PROFILE_IMAGE: &str = "/assets/profile.png";
pub const PROFILE_FALLBACK_IMAGE: &str = "https://via.placeholder.com/400x400?text=Your+Photo";

pub const HOME_SECTION: &str = "home";
pub const ABOUT_SECTION: &str = "about";
pub const SKILLS_SECTION: &str = "skills";
pub const PROJECTS_SECTION: &str = "projects";
pub const CONTACT_SECTION: &str = "contact";

/// Ids of every page section, in render order. `pages::home` renders each
/// `<Section>` with one of these.
pub const SECTION_IDS: [&str; 5] = [HOME_SECTION, ABOUT_SECTION, SKILLS_SECTION, PROJECTS_SECTION, CONTACT_SECTION];

/// Navbar entries, each pointing at a section id.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "About", section: ABOUT_SECTION },
    NavItem { label: "Skills", section: SKILLS_SECTION },
    NavItem { label: "Projects", section: PROJECTS_SECTION },
    NavItem { label: "Contact", section: CONTACT_SECTION },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

impl NavItem {
    pub fn href(self) -> String {
        format!("#{}", self.section)
    }
}

/// Headline figure in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat { value: "10+", label: "Projects", gradient: "stat--blue-purple" },
    Stat { value: "1+", label: "Years Experience", gradient: "stat--purple-indigo" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Layers,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Server => "\u{2630}",
            Self::Layers => "\u{25a4}",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillStack {
    pub title: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

pub const SKILL_STACKS: [SkillStack; 3] = [
    SkillStack {
        title: "Frontend",
        icon: SkillIcon::Code,
        skills: &["Html", "Css", "JavaScript", "React", "Tailwind", "Bootstrap"],
        accent: "accent--blue",
    },
    SkillStack {
        title: "Backend",
        icon: SkillIcon::Server,
        skills: &["Node.js", "PostgreSQL", "MySQL", "Python"],
        accent: "accent--green",
    },
    SkillStack {
        title: "DevOps",
        icon: SkillIcon::Layers,
        skills: &["Figma", "Git", "GitHub"],
        accent: "accent--purple",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// CSS modifier selecting the banner gradient.
    pub gradient: &'static str,
    pub image: &'static str,
    pub source_url: &'static str,
    pub live_url: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Portfolio Website",
        description: "A modern developer portfolio showcasing projects, skills and experience with a clean UI.",
        tags: &["React", "Tailwind"],
        gradient: "project-card__banner--blue-purple",
        image: "/assets/portfolio.png",
        source_url: REPOSITORIES_URL,
        live_url: REPOSITORIES_URL,
    },
    Project {
        title: "Student Management System",
        description: "Student management system with CRUD features and a user-friendly interface.",
        tags: &["Laravel", "Bootstrap"],
        gradient: "project-card__banner--emerald-teal",
        image: "/assets/stumanagement.png",
        source_url: REPOSITORIES_URL,
        live_url: REPOSITORIES_URL,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// CSS modifier selecting the hover colour.
    pub modifier: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", href: "https://github.com/yourusername", modifier: "footer__social--github" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/in/yourusername", modifier: "footer__social--linkedin" },
    SocialLink { label: "Instagram", href: "https://instagram.com/yourusername", modifier: "footer__social--instagram" },
    SocialLink { label: "Facebook", href: "https://facebook.com/yourusername", modifier: "footer__social--facebook" },
];
