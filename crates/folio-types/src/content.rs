//! The authored portfolio content. Everything here is fixed at build
//! time; the renderers treat it as read-only data.

use crate::domain::{
    EducationRecord, ExperienceRecord, InfoEntry, LinkKind, OutboundLink, Profile, ProjectRecord,
    SkillCategory, Stat,
};
use crate::glyph::Icon;
use once_cell::sync::Lazy;
use serde::Serialize;

/// The complete content model rendered by every surface
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillCategory>,
    pub tools: Vec<&'static str>,
}

static PORTFOLIO: Lazy<Portfolio> = Lazy::new(|| Portfolio {
    profile: Profile {
        name: "Abdullah Unaiz",
        headlines: vec![
            "Data Analyst",
            "Python Developer",
            "ML Enthusiast",
            "Problem Solver",
        ],
        tagline: "Aspiring Data Analytics professional with expertise in Python, SQL, \
                  Power BI, and Machine Learning. Passionate about transforming data \
                  into actionable insights.",
        summary: vec![
            "I'm a passionate Data Analytics professional with a strong foundation in \
             statistical analysis, machine learning, and data visualization. Currently \
             pursuing my BSc Honours in Financial Mathematics and Industrial Statistics \
             at University of Ruhuna.",
            "With hands-on experience in Python, SQL, Power BI, and advanced analytics, \
             I'm eager to transform complex data into actionable business insights. My \
             internship at the Department of Census and Statistics has further \
             strengthened my analytical capabilities.",
        ],
        stats: vec![
            Stat { figure: "3+", label: "Projects" },
            Stat { figure: "5+", label: "Technologies" },
            Stat { figure: "1", label: "Internship" },
            Stat { figure: "2", label: "Degrees" },
        ],
        info: vec![
            InfoEntry { icon: Icon::Person, label: "Name", value: "Abdullah Unaiz" },
            InfoEntry { icon: Icon::Mail, label: "Email", value: "abdlearn99@gmail.com" },
            InfoEntry { icon: Icon::Phone, label: "Phone", value: "+94 77 551 0715" },
            InfoEntry { icon: Icon::MapPin, label: "Location", value: "Bandaragama, Sri Lanka" },
            InfoEntry {
                icon: Icon::GraduationCap,
                label: "Education",
                value: "BSc Financial Mathematics",
            },
            InfoEntry {
                icon: Icon::Briefcase,
                label: "Status",
                value: "Statistics & Analytics Intern",
            },
        ],
        links: vec![
            OutboundLink {
                kind: LinkKind::CodeHosting,
                icon: Icon::Code,
                label: "GitHub",
                url: "https://github.com/AbdullahUnaiz99",
            },
            OutboundLink {
                kind: LinkKind::ProfessionalNetwork,
                icon: Icon::Link,
                label: "LinkedIn",
                url: "https://linkedin.com/in/abdullah-unaiz",
            },
            OutboundLink {
                kind: LinkKind::Email,
                icon: Icon::Mail,
                label: "Email",
                url: "mailto:abdlearn99@gmail.com",
            },
            OutboundLink {
                kind: LinkKind::Telephone,
                icon: Icon::Phone,
                label: "Phone",
                url: "tel:+94775510715",
            },
        ],
        footer: "© 2025 Abdullah Unaiz. All rights reserved.",
    },
    education: vec![
        EducationRecord {
            degree: "BSc Honours in Financial Mathematics and Industrial Statistics",
            institution: "University of Ruhuna, Matara",
            period: "2021 – 2025",
            icon: Icon::GraduationCap,
        },
        EducationRecord {
            degree: "Advanced Diploma in Data Science",
            institution: "National Institute of Business Management, Colombo",
            period: "2023 – 2024",
            icon: Icon::ChartBoard,
        },
        EducationRecord {
            degree: "G.C.E Advanced Level (Physical Science)",
            institution: "Royal College, Colombo",
            period: "2016 – 2018",
            icon: Icon::School,
        },
    ],
    experience: vec![ExperienceRecord {
        role: "Statistics & Analytics Intern",
        organization: "Department of Census and Statistics",
        period: "Mar 2025 – Sep 2025",
        highlights: vec![
            "Worked in the Industry and National Accounts Divisions to clean, analyze, \
             and visualize economic and trade data using Excel and Power BI",
            "Analyzed financial indicators for listed companies including profit, \
             stocks, dividends, and expenditures to support GDP estimation workflows",
        ],
    }],
    projects: vec![
        ProjectRecord {
            title: "End-to-End Retail Customer Analytics",
            description: "Performed comprehensive retail customer analytics using Python, \
                          SQL, and Power BI, including data cleaning, business analysis, \
                          and dashboard development.",
            technologies: vec!["Python", "PostgreSQL", "Power BI", "Excel", "Jupyter Notebook"],
            icon: Icon::ShoppingCart,
            period: Some("2024 – 2025"),
            link: Some("https://github.com/AbdullahUnaiz99"),
        },
        ProjectRecord {
            title: "Spotify Track Data Analytics",
            description: "Built an end-to-end Spotify data pipeline using Python and SQL \
                          Server to extract, transform, and load track metadata for \
                          comprehensive analysis.",
            technologies: vec!["Python", "SQL Server", "Spotipy", "Matplotlib", "Spotify API"],
            icon: Icon::MusicNote,
            period: Some("2024 – 2025"),
            link: Some("https://github.com/AbdullahUnaiz99"),
        },
        ProjectRecord {
            title: "SARIMA vs Prophet: Exchange Rate Forecasting",
            description: "Comparative time-series study of major global currencies against \
                          Sri Lankan Rupee using SARIMA and Prophet models.",
            technologies: vec!["Python", "Prophet", "statsmodels", "NumPy", "Matplotlib"],
            icon: Icon::CurrencyExchange,
            period: Some("2024 – 2025"),
            link: Some("https://github.com/AbdullahUnaiz99"),
        },
    ],
    skills: vec![
        SkillCategory {
            label: "Programming",
            icon: Icon::Code,
            items: vec!["Python", "R", "SQL"],
        },
        SkillCategory {
            label: "Databases",
            icon: Icon::Database,
            items: vec!["Microsoft SQL Server", "PostgreSQL"],
        },
        SkillCategory {
            label: "Analytics & Visualization",
            icon: Icon::BarChart,
            items: vec!["Pandas", "Power BI", "Matplotlib", "Excel"],
        },
        SkillCategory {
            label: "Machine Learning",
            icon: Icon::Brain,
            items: vec!["Prophet", "Scikit-learn", "Minitab"],
        },
    ],
    tools: vec!["VS Code", "Jupyter Notebook", "SSMS", "Git", "Spotify API"],
});

/// The portfolio content, built once on first use
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_populated() {
        let p = portfolio();
        assert_eq!(p.education.len(), 3);
        assert_eq!(p.experience.len(), 1);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.skills.len(), 4);
        assert!(!p.tools.is_empty());
        assert_eq!(p.profile.stats.len(), 4);
    }

    #[test]
    fn test_content_serializes_to_json() {
        let json = serde_json::to_string(portfolio()).unwrap();
        assert!(json.contains("Abdullah Unaiz"));
        assert!(json.contains("SARIMA vs Prophet"));
    }

    #[test]
    fn test_every_project_names_its_technologies() {
        for project in &portfolio().projects {
            assert!(!project.technologies.is_empty(), "{}", project.title);
        }
    }
}
