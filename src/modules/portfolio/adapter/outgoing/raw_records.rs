// src/modules/portfolio/adapter/outgoing/raw_records.rs
//
// Authored data as it exists on disk. Every field is optional and several
// fields accept more than one historical shape; `normalize` turns these into
// the canonical entities.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPortfolio {
    pub profile: Option<RawProfile>,
    #[serde(default)]
    pub timeline: Vec<RawTimelineEntry>,
    #[serde(default)]
    pub experience: Vec<RawExperience>,
    #[serde(default)]
    pub education: Vec<RawEducation>,
    #[serde(default)]
    pub certifications: Vec<RawCertification>,
    #[serde(default)]
    pub hackathons: Vec<RawHackathon>,
    #[serde(default)]
    pub projects: Vec<RawProject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub about: Option<Vec<String>>,
    pub links: Option<Vec<RawProfileLink>>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawProfileLink {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub id: Option<String>,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub tech_stack: Option<Vec<RawTechStackEntry>>,
    pub features: Option<Vec<RawFeature>>,
    pub architecture: Option<RawArchitecture>,
    pub achievements: Option<Vec<RawAchievement>>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub learnings: Option<Vec<String>>,
    pub category: Option<String>,
    pub complexity: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// `techStack` holds either bare names or `{category, technologies}` groups.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTechStackEntry {
    Name(String),
    Group(RawTechGroup),
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
pub struct RawTechGroup {
    pub category: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawFeature {
    Plain(String),
    Structured(RawStructuredFeature),
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
pub struct RawStructuredFeature {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawAchievement {
    Plain(String),
    Metric(RawMetricAchievement),
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
pub struct RawMetricAchievement {
    pub metric: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawArchitecture {
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub deployment: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Timeline / Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
pub struct RawTimelineEntry {
    pub id: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExperience {
    pub id: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub company_description: Option<String>,
    pub company_website: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<RawAchievement>>,
    pub responsibilities: Option<Vec<String>>,
    pub impact: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEducation {
    pub id: Option<String>,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub details: Option<RawEducationDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEducationDetails {
    pub overview: Option<String>,
    pub college: Option<String>,
    pub register_number: Option<String>,
    pub academic_performance: Option<RawAcademicPerformance>,
    pub core_modules: Option<Vec<RawCourseModule>>,
    pub core_skills: Option<Vec<RawSkillCategory>>,
    pub technologies: Option<Vec<String>>,
    pub laboratory_experience: Option<Vec<String>>,
    pub project_work: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAcademicPerformance {
    #[serde(rename = "overallCGPA")]
    pub overall_cgpa: Option<String>,
    pub classification: Option<String>,
    #[serde(rename = "peakSGPA")]
    pub peak_sgpa: Option<String>,
    #[serde(rename = "consistentPerformance")]
    pub consistent_performance: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCourseModule {
    pub name: Option<String>,
    pub credits: Option<u32>,
    pub grade: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Certifications / Hackathons
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCertification {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
    pub verification_url: Option<String>,
    pub competencies: Option<Vec<String>>,
    pub badge_url: Option<String>,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHackathon {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub project: Option<RawHackathonProject>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub organizer: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub achievement: Option<String>,
    pub skills: Option<Vec<String>>,
    pub badge_url: Option<String>,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawHackathonProject {
    Name(String),
    Detailed(RawHackathonProjectDetail),
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHackathonProjectDetail {
    pub name: String,
    pub description: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub impact: Vec<String>,
}
