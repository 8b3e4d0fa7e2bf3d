use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

/// The whole, normalised portfolio. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Portfolio {
    pub profile: Profile,
    pub timeline: Vec<TimelineEntry>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub hackathons: Vec<Hackathon>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn record_count(&self) -> usize {
        self.timeline.len()
            + self.experience.len()
            + self.education.len()
            + self.certifications.len()
            + self.hackathons.len()
            + self.projects.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub designation: Option<String>,
    pub about: Vec<String>,
    pub links: Vec<ProfileLink>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Card text: short description, else legacy description, else full description.
    pub summary: String,
    /// Overlay text: full description, else legacy description, else short description.
    pub overview: String,
    pub repository_url: Option<String>,
    pub live_url: Option<String>,
    /// Flat tag list shown on the card.
    pub technologies: Vec<String>,
    pub tech_stack: TechStack,
    pub features: Vec<Feature>,
    pub architecture: Option<Architecture>,
    pub achievements: Vec<Achievement>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub learnings: Vec<String>,
    pub category: Option<ProjectCategory>,
    pub complexity: Option<Complexity>,
    pub status: Option<ProjectStatus>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TechStack {
    Plain { technologies: Vec<String> },
    Grouped { groups: Vec<TechGroup> },
}

impl TechStack {
    pub fn is_empty(&self) -> bool {
        match self {
            TechStack::Plain { technologies } => technologies.is_empty(),
            TechStack::Grouped { groups } => groups.is_empty(),
        }
    }

    /// Technology names with the category labels dropped.
    pub fn flatten(&self) -> Vec<String> {
        match self {
            TechStack::Plain { technologies } => technologies.clone(),
            TechStack::Grouped { groups } => groups
                .iter()
                .flat_map(|group| group.technologies.iter().cloned())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechGroup {
    pub category: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    Plain {
        text: String,
    },
    Structured {
        title: String,
        description: Option<String>,
        details: Vec<String>,
    },
}

impl Feature {
    /// The single line shown on a card.
    pub fn headline(&self) -> &str {
        match self {
            Feature::Plain { text } => text,
            Feature::Structured { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Achievement {
    Plain { text: String },
    Metric { metric: String, description: String },
}

impl Achievement {
    pub fn compact(&self) -> String {
        match self {
            Achievement::Plain { text } => text.clone(),
            Achievement::Metric {
                metric,
                description,
            } => format!("{}: {}", metric, description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Architecture {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub database: Vec<String>,
    pub deployment: Vec<String>,
}

impl Architecture {
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
            && self.frontend.is_empty()
            && self.database.is_empty()
            && self.deployment.is_empty()
    }

    pub fn layers(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Backend", &self.backend),
            ("Frontend", &self.frontend),
            ("Database", &self.database),
            ("Deployment", &self.deployment),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    FullStack,
    AiMl,
    WebScraping,
    Mobile,
    CliTool,
    ECommerce,
    Social,
    ComputerVision,
    Other,
}

impl ProjectCategory {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "full-stack" => Some(Self::FullStack),
            "ai-ml" => Some(Self::AiMl),
            "web-scraping" => Some(Self::WebScraping),
            "mobile" => Some(Self::Mobile),
            "cli-tool" => Some(Self::CliTool),
            "e-commerce" => Some(Self::ECommerce),
            "social" => Some(Self::Social),
            "computer-vision" => Some(Self::ComputerVision),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::AiMl => "AI / ML",
            ProjectCategory::WebScraping => "Web Scraping",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::CliTool => "CLI Tool",
            ProjectCategory::ECommerce => "E-commerce",
            ProjectCategory::Social => "Social",
            ProjectCategory::ComputerVision => "Computer Vision",
            ProjectCategory::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
            Complexity::Expert => "Expert",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "completed" => Some(Self::Completed),
            "in-progress" => Some(Self::InProgress),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        };
        write!(f, "{}", s)
    }
}

//
// ──────────────────────────────────────────────────────────
// Timeline / Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    pub id: String,
    pub date: String,
    pub title: String,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub kind: TimelineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Education,
    Experience,
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineKind::Education => write!(f, "education"),
            TimelineKind::Experience => write!(f, "experience"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company_description: Option<String>,
    pub company_website: Option<String>,
    pub technologies: Vec<String>,
    pub achievements: Vec<Achievement>,
    pub responsibilities: Vec<String>,
    pub impact: Vec<String>,
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub details: Option<EducationDetails>,
}

/// Every sub-block is independently optional; an absent or empty one is not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EducationDetails {
    pub overview: Option<String>,
    pub college: Option<String>,
    pub register_number: Option<String>,
    pub academic_performance: Option<AcademicPerformance>,
    pub core_modules: Vec<CourseModule>,
    pub core_skills: Vec<SkillCategory>,
    pub technologies: Vec<String>,
    pub laboratory_experience: Vec<String>,
    pub project_work: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AcademicPerformance {
    pub overall_cgpa: Option<String>,
    pub classification: Option<String>,
    pub peak_sgpa: Option<String>,
    pub consistent_performance: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseModule {
    pub name: String,
    pub credits: Option<u32>,
    pub grade: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Certifications / Hackathons
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
    pub verification_url: Option<String>,
    pub competencies: Vec<String>,
    pub badge_url: Option<String>,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Hackathon {
    pub id: String,
    pub title: String,
    pub project: Option<HackathonProject>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub achievement: Option<String>,
    pub skills: Vec<String>,
    pub badge_url: Option<String>,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HackathonProject {
    Named {
        name: String,
    },
    Detailed {
        name: String,
        description: Option<String>,
        live_url: Option<String>,
        features: Vec<String>,
        technologies: Vec<String>,
        impact: Vec<String>,
    },
}

impl HackathonProject {
    pub fn name(&self) -> &str {
        match self {
            HackathonProject::Named { name } => name,
            HackathonProject::Detailed { name, .. } => name,
        }
    }
}
