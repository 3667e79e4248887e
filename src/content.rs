use std::{fmt, str::FromStr};

use thiserror::Error;

pub const PROFILE: Profile = Profile {
    name: "Verdian Loloate Berutu",
    initials: "VB",
    role: "Data Analyst & Full-Stack Developer",
    summary: "Fresh graduate Informatics student with GPA 3.85/4.00. Experienced in data analysis, ETL pipelines, interactive dashboards, and full-stack development. Skilled in Python, SQL, Power BI, Tableau, and Laravel. Proven track record of improving data accuracy and delivering actionable insights.",
    email: "verdianloloateberutu@gmail.com",
    phone: "+62 813 6141 2357",
    location: "Bekasi, Indonesia",
    github: "https://github.com/VerdianBerutu",
    linkedin: "https://www.linkedin.com/in/verdianloloateberutu/",
    resume_path: "/resume.pdf",
    resume_download_name: "Verdian-Loloate-Berutu-CV.pdf",
};

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// Served from `public/`, which cargo-leptos copies to the site root.
    pub resume_path: &'static str,
    pub resume_download_name: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The anchor-addressable blocks of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("no such section: {0}")]
    Unknown(String),
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Element id of the section, also used as its anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillHeadline {
    Languages(&'static str),
    Technologies(&'static str),
    Focus(&'static str),
}

impl SkillHeadline {
    pub fn text(self) -> &'static str {
        match self {
            SkillHeadline::Languages(s) | SkillHeadline::Technologies(s) | SkillHeadline::Focus(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Branch,
    Code,
    Palette,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub icon: SkillIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub headline: SkillHeadline,
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub year: u16,
    pub company: &'static str,
    pub role: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        icon: SkillIcon::Branch,
        title: "Data Analyst",
        description: "Experienced in data cleaning, validation, and building interactive dashboards. Skilled in extracting insights from large datasets and improving data accuracy.",
        headline: SkillHeadline::Languages("Python, SQL, R, PostgreSQL, MySQL"),
        tools: &["Pandas", "Power BI", "Tableau", "Google Looker", "Excel"],
    },
    Skill {
        icon: SkillIcon::Code,
        title: "Full-Stack Developer",
        description: "Built production-ready web applications with responsive design. Experienced in API integration, authentication, and database management.",
        headline: SkillHeadline::Technologies("Laravel, JavaScript, HTML, CSS, Git"),
        tools: &["Laravel", "PostgreSQL", "MySQL", "Git", "Jupyter Notebook"],
    },
    Skill {
        icon: SkillIcon::Palette,
        title: "Data Engineer & ML",
        description: "Proficient in predictive modeling, statistical analysis, and clustering algorithms. Experienced with machine learning frameworks and optimization techniques.",
        headline: SkillHeadline::Focus("Predictive Modeling, Statistical Analysis, Clustering"),
        tools: &["TensorFlow", "ETL Pipeline", "Scikit-learn", "Matplotlib", "Python"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Automated ETL Pipeline - Weather & Disaster Data",
        description: "Built automated ETL pipeline using Apache Airflow to extract weather and disaster data from BMKG API. Improved data accuracy by 35% and reduced manual processing time by 80%.",
        tech: &["Python", "Apache Airflow", "PostgreSQL", "API"],
        gradient: "from-blue-400 to-cyan-500",
    },
    Project {
        title: "Stock Market ETL Pipeline",
        description: "Developed end-to-end ETL pipeline extracting 5+ years of stock data from Yahoo Finance. Processed 50,000+ records with 40% improvement in consistency and 60% faster query performance.",
        tech: &["Python", "PostgreSQL", "Pandas", "yfinance"],
        gradient: "from-green-400 to-emerald-500",
    },
    Project {
        title: "Stock Market Data Visualization Dashboard",
        description: "Created interactive Power BI dashboard with automatic data refresh from PostgreSQL. Featured real-time stock analysis with line charts, slicers, and KPI cards.",
        tech: &["Python", "Power BI", "PostgreSQL", "DAX"],
        gradient: "from-yellow-400 to-orange-500",
    },
    Project {
        title: "Unemployment Rate Clustering Analysis",
        description: "Performed K-Medoids clustering with PSO optimization on socio-economic datasets. Reduced DBI value from 0.82 to 0.76, improving clustering quality significantly.",
        tech: &["Python", "Scikit-learn", "PSO", "Machine Learning"],
        gradient: "from-purple-400 to-pink-500",
    },
];

const EXPERIENCES: &[Experience] = &[
    Experience {
        year: 2024,
        company: "Dinas Sosial Kota Medan",
        role: "Data Analyst Intern - MSIB Program | Cleaned and validated 25,000+ beneficiary records, improving data accuracy by 30%. Built interactive dashboards that enabled 50% faster decision-making.",
    },
    Experience {
        year: 2023,
        company: "Dicoding Indonesia",
        role: "Full-Stack Developer - MSIB Program | Completed full-stack capstone project with API integration and authentication. Improved workflow efficiency by 30% and UX by 40%.",
    },
    Experience {
        year: 2023,
        company: "GSDC UPN Veteran Jawa Timur",
        role: "Member | Participated in weekly learning sessions and workshops on computer networks and cloud computing.",
    },
    Experience {
        year: 2023,
        company: "Landasan Kepemimpinan",
        role: "Disciplinary Committee | Promoted character development and ensured discipline compliance among 400+ student participants.",
    },
    Experience {
        year: 2021,
        company: "UPN Veteran Jawa Timur",
        role: "Bachelor of Informatics | GPA: 3.85/4.00 | Coursework: Data Analysis, Web Development, Database Systems, Statistics, Cloud Computing, Business Intelligence.",
    },
];

/// Timeline entries, newest first. Entries sharing a year keep their listed order.
pub fn experiences() -> Vec<Experience> {
    let mut entries = EXPERIENCES.to_vec();
    entries.sort_by(|a, b| b.year.cmp(&a.year));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(SectionError::Unknown("blog".to_string()))
        );
    }

    #[test]
    fn test_sections_in_document_order() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["about", "skills", "projects", "experience", "contact"]);
        assert_eq!(Section::About.nav_label(), "Home");
    }

    #[test]
    fn test_experiences_newest_first() {
        let entries = experiences();
        assert_eq!(entries.len(), EXPERIENCES.len());
        assert!(entries.windows(2).all(|w| w[0].year >= w[1].year));

        // same-year entries stay in listed order
        let companies_2023 = entries
            .iter()
            .filter(|e| e.year == 2023)
            .map(|e| e.company)
            .collect::<Vec<_>>();
        assert_eq!(
            companies_2023,
            vec![
                "Dicoding Indonesia",
                "GSDC UPN Veteran Jawa Timur",
                "Landasan Kepemimpinan"
            ]
        );
    }

    #[test]
    fn test_skill_headline_text() {
        let headlines = SKILLS.iter().map(|s| s.headline.text()).collect::<Vec<_>>();
        assert_eq!(headlines[0], "Python, SQL, R, PostgreSQL, MySQL");
        assert!(matches!(SKILLS[2].headline, SkillHeadline::Focus(_)));
        assert!(SKILLS.iter().all(|s| !s.tools.is_empty()));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:verdianloloateberutu@gmail.com");
        assert!(PROFILE.resume_path.starts_with('/'));
    }

    #[test]
    fn test_resume_asset_is_shipped() {
        let asset = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(PROFILE.resume_path.trim_start_matches('/'));
        let bytes = std::fs::read(&asset).expect("resume should be in public/");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
