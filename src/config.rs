//! Static site content. One `SiteConfig` drives the whole component tree so
//! the sections stay generic over who the portfolio belongs to.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub resume_href: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Devicon class, rendered as `<i class=...>`.
    pub icon_class: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live_demo: &'static str,
    pub repo: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub identity: Identity,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub contact: ContactInfo,
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        identity: Identity {
            name: "Rama Lakshmi",
            role: "Full Stack Developer",
            tagline: "Full Stack Developer specializing in React, Node.js, and Supabase — crafting scalable applications with secure authentication and real-time systems.",
            resume_href: "/resume.pdf",
            github: "https://github.com/ramalakshmi",
            linkedin: "https://linkedin.com/in/ramalakshmi",
        },
        skills: SKILLS,
        projects: PROJECTS,
        contact: ContactInfo {
            phone: "+91 77607 55588",
            email: "mlakshmipradeep@gmail.com",
            location: "Anantapur, Andhra Pradesh, India",
        },
    }
}

const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML5",
        icon_class: "devicon-html5-plain",
        accent: "text-orange",
    },
    Skill {
        name: "CSS3",
        icon_class: "devicon-css3-plain",
        accent: "text-blue",
    },
    Skill {
        name: "React",
        icon_class: "devicon-react-original",
        accent: "text-cyan",
    },
    Skill {
        name: "Tailwind CSS",
        icon_class: "devicon-tailwindcss-original",
        accent: "text-brightCyan",
    },
    Skill {
        name: "Node.js",
        icon_class: "devicon-nodejs-plain",
        accent: "text-green",
    },
    Skill {
        name: "Express",
        icon_class: "devicon-express-original",
        accent: "text-foreground",
    },
    Skill {
        name: "Supabase",
        icon_class: "devicon-supabase-plain",
        accent: "text-brightGreen",
    },
    Skill {
        name: "MongoDB",
        icon_class: "devicon-mongodb-plain",
        accent: "text-green",
    },
    Skill {
        name: "GitHub",
        icon_class: "devicon-github-plain",
        accent: "text-foreground",
    },
    Skill {
        name: "VS Code",
        icon_class: "devicon-vscode-plain",
        accent: "text-blue",
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Recipe Management System",
        description: "Full-stack recipe discovery app with AI-powered search, user favorites, authentication, and PostgreSQL integration.",
        tech: &["React", "Node.js", "Supabase", "Prisma"],
        live_demo: "https://recipes.ramalakshmi.dev",
        repo: "https://github.com/ramalakshmi/recipe-app",
        image: "/images/recipe-app.jpg",
    },
    Project {
        title: "Order Management Dashboard",
        description: "Enterprise order processing platform with real-time analytics, role-based access, and comprehensive reporting.",
        tech: &["React", "Express.js", "Supabase", "Tailwind"],
        live_demo: "https://orders.ramalakshmi.dev",
        repo: "https://github.com/ramalakshmi/order-management",
        image: "/images/order-dashboard.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_sections_are_populated() {
        let config = site_config();
        assert!(!config.skills.is_empty());
        assert!(!config.projects.is_empty());
        assert!(!config.identity.name.is_empty());
    }

    #[test]
    fn projects_link_somewhere_real() {
        for project in site_config().projects {
            assert!(project.repo.starts_with("https://"), "{}", project.title);
            assert!(
                project.live_demo.starts_with("https://"),
                "{}",
                project.title
            );
            assert!(!project.tech.is_empty(), "{}", project.title);
        }
    }
}
