use std::collections::HashSet;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";
const DEFAULT_FREELANCE_PROFILE: &str = "https://www.fiverr.com";

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Portfolio content not found")]
    MissingContent,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(String),
    #[error("Duplicate experience entry: {company} ({period})")]
    DuplicateExperience { company: String, period: String },
}

/// Everything the site renders. Built once per render root and handed down to the sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub about: AboutInfo,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: SkillsData,
    pub extracurricular: ExtracurricularSummary,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub description: String,
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ExperienceEntry {
    /// Render key. Unique across entries in valid content.
    pub fn key(&self) -> String {
        format!("{}-{}", self.company, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub impact: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    pub duration: String,
    pub role: String,
    pub team_size: String,
    pub link: String,
}

impl Project {
    pub fn route(&self) -> String {
        format!("/projects/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    // proficiency 0-100, kept in the content but not displayed
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsData {
    pub languages: Vec<Skill>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub practices: Vec<String>,
}

impl SkillsData {
    /// Skill names in display order: languages, frameworks, tools, then practices.
    pub fn all_names(&self) -> Vec<String> {
        self.languages
            .iter()
            .map(|s| s.name.clone())
            .chain(self.frameworks.iter().cloned())
            .chain(self.tools.iter().cloned())
            .chain(self.practices.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtracurricularSummary {
    pub platform: String,
    pub level: String,
    pub rating: String,
    pub projects: String,
    pub description: String,
    #[serde(default)]
    pub profile_url: Option<String>,
}

impl ExtracurricularSummary {
    pub fn profile_url(&self) -> &str {
        match self.profile_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_FREELANCE_PROFILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    LinkedIn,
    GitHub,
    Twitter,
    Email,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter",
            Self::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLinks {
    pub fn entries(&self) -> Vec<SocialLink> {
        vec![
            SocialLink {
                kind: SocialKind::LinkedIn,
                href: self.linkedin.clone(),
            },
            SocialLink {
                kind: SocialKind::GitHub,
                href: self.github.clone(),
            },
            SocialLink {
                kind: SocialKind::Twitter,
                href: self.twitter.clone(),
            },
            SocialLink {
                kind: SocialKind::Email,
                href: format!("mailto:{}", self.email),
            },
        ]
    }
}

/// Result of looking a project up by its route slug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectLookup<'a> {
    Found(&'a Project),
    NotFound,
}

impl<'a> ProjectLookup<'a> {
    pub fn project(self) -> Option<&'a Project> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }
}

impl Portfolio {
    /// Parses the content compiled into the binary.
    pub fn load() -> Result<Self, PortfolioError> {
        let file = Content::get(CONTENT_FILE).ok_or(PortfolioError::MissingContent)?;
        let content = std::str::from_utf8(&file.data)
            .map_err(|e| PortfolioError::Parse(e.to_string()))?;
        Self::from_json(content)
    }

    pub fn from_json(content: &str) -> Result<Self, PortfolioError> {
        serde_json::from_str(content).map_err(|e| PortfolioError::Parse(e.to_string()))
    }

    /// Checks the uniqueness rules that routing and list rendering rely on.
    /// Loading never calls this; the server runs it once at start-up.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for p in &self.projects {
            if !slugs.insert(p.slug.as_str()) {
                return Err(PortfolioError::DuplicateSlug(p.slug.clone()));
            }
            if !ids.insert(p.id.as_str()) {
                return Err(PortfolioError::DuplicateProjectId(p.id.clone()));
            }
        }
        let mut keys = HashSet::new();
        for e in &self.experience {
            if !keys.insert((e.company.as_str(), e.period.as_str())) {
                return Err(PortfolioError::DuplicateExperience {
                    company: e.company.clone(),
                    period: e.period.clone(),
                });
            }
        }
        Ok(())
    }

    /// Exact slug match; the first matching project wins.
    pub fn resolve_project(&self, slug: &str) -> ProjectLookup<'_> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .map_or(ProjectLookup::NotFound, ProjectLookup::Found)
    }

    /// One slug per project, in content order, without deduplication.
    pub fn project_slugs(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.slug.clone()).collect()
    }

    pub fn project_routes(&self) -> Vec<String> {
        self.projects.iter().map(Project::route).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn test_content_compiled_into_binary() {
        // files read from disk at runtime come back owned
        let file = Content::get(CONTENT_FILE).expect("portfolio.json should be embedded");
        assert!(matches!(file.data, Cow::Borrowed(_)));
        assert_eq!(
            &*file.data,
            include_bytes!("../content/portfolio.json").as_slice()
        );
    }

    fn project(id: &str, slug: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: String::new(),
            full_description: String::new(),
            image: String::new(),
            technologies: vec![],
            impact: String::new(),
            challenges: vec![],
            outcomes: vec![],
            duration: String::new(),
            role: String::new(),
            team_size: String::new(),
            link: "#".to_string(),
        }
    }

    #[test]
    fn test_embedded_content_loads_and_validates() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert_eq!(portfolio.name, "Harsha Madhushan");
        assert_eq!(portfolio.about.stats.len(), 3);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.projects.len(), 4);
        assert!(portfolio.validate().is_ok());
    }

    #[test]
    fn test_resolve_project() {
        let portfolio = Portfolio::load().unwrap();

        let found = portfolio.resolve_project("ai-analytics-platform");
        let p = found.project().expect("project should resolve");
        assert_eq!(p.title, "AI-Powered Analytics Platform");

        // same slug, same record
        assert_eq!(portfolio.resolve_project("ai-analytics-platform"), found);

        assert_eq!(
            portfolio.resolve_project("not-a-real-project"),
            ProjectLookup::NotFound
        );
        // exact match only
        assert_eq!(
            portfolio.resolve_project("AI-Analytics-Platform"),
            ProjectLookup::NotFound
        );
        assert_eq!(portfolio.resolve_project(""), ProjectLookup::NotFound);
    }

    #[test]
    fn test_project_routes() {
        let portfolio = Portfolio::load().unwrap();
        let routes = portfolio.project_routes();
        assert_eq!(routes.len(), portfolio.projects.len());
        let unique: HashSet<_> = routes.iter().collect();
        assert_eq!(unique.len(), routes.len());
        assert_eq!(routes[0], "/projects/ai-analytics-platform");
        assert_eq!(
            portfolio.project_slugs(),
            vec![
                "ai-analytics-platform",
                "ecommerce-marketplace",
                "mobile-health-tracker",
                "devops-automation-suite",
            ]
        );
    }

    #[test]
    fn test_duplicate_slugs() {
        let mut portfolio = Portfolio::load().unwrap();
        portfolio.projects = vec![
            project("a", "same", "First"),
            project("b", "same", "Second"),
        ];

        // first match wins, one route per entry
        let p = portfolio.resolve_project("same").project().unwrap();
        assert_eq!(p.title, "First");
        assert_eq!(portfolio.project_routes().len(), 2);

        assert_eq!(
            portfolio.validate(),
            Err(PortfolioError::DuplicateSlug("same".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_and_experience_keys() {
        let mut portfolio = Portfolio::load().unwrap();
        portfolio.projects = vec![project("a", "one", "One"), project("a", "two", "Two")];
        assert_eq!(
            portfolio.validate(),
            Err(PortfolioError::DuplicateProjectId("a".to_string()))
        );

        let mut portfolio = Portfolio::load().unwrap();
        let first = portfolio.experience[0].clone();
        portfolio.experience.push(first);
        assert!(matches!(
            portfolio.validate(),
            Err(PortfolioError::DuplicateExperience { .. })
        ));
    }

    #[test]
    fn test_skill_names_order() {
        let portfolio = Portfolio::load().unwrap();
        let names = portfolio.skills.all_names();
        let skills = &portfolio.skills;
        assert_eq!(
            names.len(),
            skills.languages.len()
                + skills.frameworks.len()
                + skills.tools.len()
                + skills.practices.len()
        );
        assert_eq!(names[0], "TypeScript");
        assert_eq!(names[4], "React");
        assert_eq!(names.last().map(String::as_str), Some("System Design"));
        // levels stay in the model
        assert_eq!(skills.languages[3].level, 80);
    }

    #[test]
    fn test_social_entries() {
        let portfolio = Portfolio::load().unwrap();
        let entries = portfolio.social.entries();
        let labels: Vec<&str> = entries.iter().map(|e| e.kind.label()).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub", "Twitter", "Email"]);
        assert_eq!(entries[3].href, "mailto:your.email@example.com");
    }

    #[test]
    fn test_freelance_profile_fallback() {
        let mut data = Portfolio::load().unwrap().extracurricular;
        assert_eq!(data.profile_url(), "https://www.fiverr.com/your-username");
        data.profile_url = None;
        assert_eq!(data.profile_url(), "https://www.fiverr.com");
        data.profile_url = Some(String::new());
        assert_eq!(data.profile_url(), "https://www.fiverr.com");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Portfolio::from_json("{\"name\": 1}"),
            Err(PortfolioError::Parse(_))
        ));
    }
}
