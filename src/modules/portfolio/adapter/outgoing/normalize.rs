// src/modules/portfolio/adapter/outgoing/normalize.rs
//
// Resolves legacy aliases and union-typed fields once, at load time, so the
// rest of the application only ever sees canonical records.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::modules::portfolio::adapter::outgoing::raw_records::*;
use crate::modules::portfolio::application::domain::entities::*;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioLoadError {
    #[error("Failed to read portfolio data from {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed portfolio data: {0}")]
    Parse(String),

    #[error("{collection} record #{index} is missing required field `{field}`")]
    MissingField {
        collection: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{collection} record #{index} has invalid `{field}`: `{value}`")]
    InvalidValue {
        collection: &'static str,
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Duplicate id `{id}` in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
}

//
// ──────────────────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────────────────
//

pub fn normalize_portfolio(raw: RawPortfolio) -> Result<Portfolio, PortfolioLoadError> {
    let profile = normalize_profile(raw.profile.unwrap_or_default())?;

    let timeline = collect("timeline", raw.timeline, normalize_timeline_entry)?;
    let experience = collect("experience", raw.experience, normalize_experience)?;
    let education = collect("education", raw.education, normalize_education)?;
    let certifications = collect("certifications", raw.certifications, normalize_certification)?;
    let hackathons = collect("hackathons", raw.hackathons, normalize_hackathon)?;
    let projects = collect("projects", raw.projects, normalize_project)?;

    ensure_unique_ids("timeline", timeline.iter().map(|r| r.id.as_str()))?;
    ensure_unique_ids("experience", experience.iter().map(|r| r.id.as_str()))?;
    ensure_unique_ids("education", education.iter().map(|r| r.id.as_str()))?;
    ensure_unique_ids("certifications", certifications.iter().map(|r| r.id.as_str()))?;
    ensure_unique_ids("hackathons", hackathons.iter().map(|r| r.id.as_str()))?;
    ensure_unique_ids("projects", projects.iter().map(|r| r.id.as_str()))?;

    Ok(Portfolio {
        profile,
        timeline,
        experience,
        education,
        certifications,
        hackathons,
        projects,
    })
}

fn collect<R, T>(
    collection: &'static str,
    raw: Vec<R>,
    normalize: fn(&'static str, usize, R) -> Result<T, PortfolioLoadError>,
) -> Result<Vec<T>, PortfolioLoadError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize(collection, index, record))
        .collect()
}

fn ensure_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), PortfolioLoadError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortfolioLoadError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Field helpers
// ──────────────────────────────────────────────────────────
//

/// Blank strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates.into_iter().find_map(present)
}

fn required(
    value: Option<String>,
    collection: &'static str,
    index: usize,
    field: &'static str,
) -> Result<String, PortfolioLoadError> {
    present(value).ok_or(PortfolioLoadError::MissingField {
        collection,
        index,
        field,
    })
}

fn list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// `duration`, else `"<start> - <end>"`; an open-ended range reads "Present".
fn resolve_duration(
    duration: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Option<String> {
    if let Some(duration) = present(duration) {
        return Some(duration);
    }
    match (present(start), present(end)) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
        (Some(start), None) => Some(format!("{} - Present", start)),
        _ => None,
    }
}

fn normalize_achievements(raw: Option<Vec<RawAchievement>>, owner: &str) -> Vec<Achievement> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry {
            RawAchievement::Plain(text) => present(Some(text)).map(|text| Achievement::Plain { text }),
            RawAchievement::Metric(m) => match (present(Some(m.metric)), present(Some(m.description))) {
                (Some(metric), Some(description)) => Some(Achievement::Metric {
                    metric,
                    description,
                }),
                _ => {
                    debug!("Skipping blank metric achievement on {}", owner);
                    None
                }
            },
            RawAchievement::Unrecognized(value) => {
                debug!("Skipping unrecognized achievement on {}: {}", owner, value);
                None
            }
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

fn normalize_profile(raw: RawProfile) -> Result<Profile, PortfolioLoadError> {
    Ok(Profile {
        name: required(raw.name, "profile", 0, "name")?,
        designation: present(raw.designation),
        about: list(raw.about),
        links: raw
            .links
            .unwrap_or_default()
            .into_iter()
            .map(|link| ProfileLink {
                label: link.label,
                url: link.url,
                icon: present(link.icon),
            })
            .collect(),
        resume_url: present(raw.resume_url),
    })
}

fn normalize_timeline_entry(
    collection: &'static str,
    index: usize,
    raw: RawTimelineEntry,
) -> Result<TimelineEntry, PortfolioLoadError> {
    let id = required(raw.id, collection, index, "id")?;
    let kind = match raw.kind.as_deref() {
        Some("education") => TimelineKind::Education,
        Some("experience") => TimelineKind::Experience,
        Some(other) => {
            return Err(PortfolioLoadError::InvalidValue {
                collection,
                index,
                field: "type",
                value: other.to_string(),
            })
        }
        None => {
            return Err(PortfolioLoadError::MissingField {
                collection,
                index,
                field: "type",
            })
        }
    };

    Ok(TimelineEntry {
        id,
        date: required(raw.date, collection, index, "date")?,
        title: required(raw.title, collection, index, "title")?,
        organization: present(raw.organization),
        location: present(raw.location),
        kind,
    })
}

fn normalize_experience(
    collection: &'static str,
    index: usize,
    raw: RawExperience,
) -> Result<Experience, PortfolioLoadError> {
    let id = required(raw.id, collection, index, "id")?;
    let achievements = normalize_achievements(raw.achievements, &id);

    Ok(Experience {
        company: required(raw.company, collection, index, "company")?,
        title: first_present([raw.title, raw.position]).ok_or(
            PortfolioLoadError::MissingField {
                collection,
                index,
                field: "title",
            },
        )?,
        duration: resolve_duration(raw.duration, raw.start_date, raw.end_date),
        location: present(raw.location),
        company_description: present(raw.company_description),
        company_website: present(raw.company_website),
        technologies: list(raw.technologies),
        achievements,
        responsibilities: list(raw.responsibilities),
        impact: list(raw.impact),
        skills: list(raw.skills),
        id,
    })
}

fn normalize_education(
    collection: &'static str,
    index: usize,
    raw: RawEducation,
) -> Result<Education, PortfolioLoadError> {
    Ok(Education {
        id: required(raw.id, collection, index, "id")?,
        institution: required(raw.institution, collection, index, "institution")?,
        degree: required(raw.degree, collection, index, "degree")?,
        duration: resolve_duration(raw.duration, raw.start_date, raw.end_date),
        location: present(raw.location),
        grade: present(raw.grade),
        description: present(raw.description),
        details: raw.details.map(normalize_education_details),
    })
}

fn normalize_education_details(raw: RawEducationDetails) -> EducationDetails {
    EducationDetails {
        overview: present(raw.overview),
        college: present(raw.college),
        register_number: present(raw.register_number),
        academic_performance: raw.academic_performance.map(|p| AcademicPerformance {
            overall_cgpa: present(p.overall_cgpa),
            classification: present(p.classification),
            peak_sgpa: present(p.peak_sgpa),
            consistent_performance: present(p.consistent_performance),
        }),
        core_modules: raw
            .core_modules
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| {
                let name = present(m.name)?;
                Some(CourseModule {
                    name,
                    credits: m.credits,
                    grade: present(m.grade),
                    description: present(m.description),
                })
            })
            .collect(),
        core_skills: raw
            .core_skills
            .unwrap_or_default()
            .into_iter()
            .map(|c| SkillCategory {
                category: c.category,
                skills: c.skills,
            })
            .collect(),
        technologies: list(raw.technologies),
        laboratory_experience: list(raw.laboratory_experience),
        project_work: list(raw.project_work),
        achievements: list(raw.achievements),
    }
}

fn normalize_certification(
    collection: &'static str,
    index: usize,
    raw: RawCertification,
) -> Result<Certification, PortfolioLoadError> {
    Ok(Certification {
        id: required(raw.id, collection, index, "id")?,
        title: first_present([raw.title, raw.name]).ok_or(PortfolioLoadError::MissingField {
            collection,
            index,
            field: "title",
        })?,
        description: present(raw.description),
        issuer: required(raw.issuer, collection, index, "issuer")?,
        issue_date: present(raw.issue_date),
        expiration_date: present(raw.expiration_date),
        credential_id: present(raw.credential_id),
        verification_url: present(raw.verification_url),
        competencies: list(raw.competencies),
        badge_url: present(raw.badge_url),
        certificate_url: present(raw.certificate_url),
    })
}

fn normalize_hackathon(
    collection: &'static str,
    index: usize,
    raw: RawHackathon,
) -> Result<Hackathon, PortfolioLoadError> {
    let id = required(raw.id, collection, index, "id")?;

    let project = match raw.project {
        Some(RawHackathonProject::Name(name)) => {
            present(Some(name)).map(|name| HackathonProject::Named { name })
        }
        Some(RawHackathonProject::Detailed(d)) => Some(HackathonProject::Detailed {
            name: d.name,
            description: present(d.description),
            live_url: present(d.live_url),
            features: d.features,
            technologies: d.technologies,
            impact: d.impact,
        }),
        Some(RawHackathonProject::Unrecognized(value)) => {
            debug!("Skipping unrecognized project on hackathon {}: {}", id, value);
            None
        }
        None => None,
    };

    Ok(Hackathon {
        title: first_present([raw.title, raw.name]).ok_or(PortfolioLoadError::MissingField {
            collection,
            index,
            field: "title",
        })?,
        project,
        description: present(raw.description),
        issuer: first_present([raw.issuer, raw.organizer]),
        date: present(raw.date),
        location: present(raw.location),
        achievement: present(raw.achievement),
        skills: list(raw.skills),
        badge_url: present(raw.badge_url),
        certificate_url: present(raw.certificate_url),
        id,
    })
}

fn normalize_project(
    collection: &'static str,
    index: usize,
    raw: RawProject,
) -> Result<Project, PortfolioLoadError> {
    let id = required(raw.id, collection, index, "id")?;
    let title = required(raw.title, collection, index, "title")?;

    let summary = first_present([
        raw.short_description.clone(),
        raw.description.clone(),
        raw.full_description.clone(),
    ])
    .unwrap_or_default();
    let overview = first_present([raw.full_description, raw.description, raw.short_description])
        .unwrap_or_default();

    let flat_technologies = present_list(raw.technologies);
    let tech_stack = raw
        .tech_stack
        .map(|entries| normalize_tech_stack(entries, &id))
        .filter(|stack| !stack.is_empty());

    // Card tags prefer the flat list; the overlay prefers the grouped stack.
    let technologies = match (&flat_technologies, &tech_stack) {
        (Some(flat), _) => flat.clone(),
        (None, Some(stack)) => stack.flatten(),
        (None, None) => Vec::new(),
    };
    let tech_stack = tech_stack.unwrap_or_else(|| TechStack::Plain {
        technologies: technologies.clone(),
    });

    let features = raw
        .features
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry {
            RawFeature::Plain(text) => present(Some(text)).map(|text| Feature::Plain { text }),
            RawFeature::Structured(f) => Some(Feature::Structured {
                title: f.title,
                description: present(f.description),
                details: f.details,
            }),
            RawFeature::Unrecognized(value) => {
                debug!("Skipping unrecognized feature on project {}: {}", id, value);
                None
            }
        })
        .collect();

    let achievements = normalize_achievements(raw.achievements, &id);

    let architecture = raw
        .architecture
        .map(|a| Architecture {
            backend: a.backend,
            frontend: a.frontend,
            database: a.database,
            deployment: a.deployment,
        })
        .filter(|a| !a.is_empty());

    let category = raw.category.and_then(|tag| {
        let parsed = ProjectCategory::parse(&tag);
        if parsed.is_none() {
            warn!("Unknown category `{}` on project {}", tag, id);
        }
        parsed
    });
    let complexity = raw.complexity.and_then(|tag| {
        let parsed = Complexity::parse(&tag);
        if parsed.is_none() {
            warn!("Unknown complexity `{}` on project {}", tag, id);
        }
        parsed
    });
    let status = raw.status.and_then(|tag| {
        let parsed = ProjectStatus::parse(&tag);
        if parsed.is_none() {
            warn!("Unknown status `{}` on project {}", tag, id);
        }
        parsed
    });

    Ok(Project {
        title,
        summary,
        overview,
        repository_url: present(raw.github_url),
        live_url: present(raw.live_url),
        technologies,
        tech_stack,
        features,
        architecture,
        achievements,
        challenges: list(raw.challenges),
        solutions: list(raw.solutions),
        learnings: list(raw.learnings),
        category,
        complexity,
        status,
        image_url: present(raw.image_url),
        id,
    })
}

/// An absent or empty flat list falls through to `techStack`.
fn present_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    let values = list(values);
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn normalize_tech_stack(entries: Vec<RawTechStackEntry>, project_id: &str) -> TechStack {
    let mut names = Vec::new();
    let mut groups = Vec::new();

    for entry in entries {
        match entry {
            RawTechStackEntry::Name(name) => {
                if !name.trim().is_empty() {
                    names.push(name);
                }
            }
            RawTechStackEntry::Group(group) => groups.push(TechGroup {
                category: group.category,
                technologies: group.technologies,
            }),
            RawTechStackEntry::Unrecognized(value) => {
                debug!(
                    "Skipping unrecognized tech stack entry on project {}: {}",
                    project_id, value
                );
            }
        }
    }

    if groups.is_empty() {
        return TechStack::Plain {
            technologies: names,
        };
    }
    if !names.is_empty() {
        groups.push(TechGroup {
            category: "Other".to_string(),
            technologies: names,
        });
    }
    TechStack::Grouped { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawPortfolio {
        serde_json::from_str(json).expect("valid raw portfolio")
    }

    fn with_profile(body: &str) -> String {
        format!(r#"{{"profile": {{"name": "Ada"}}, {}}}"#, body)
    }

    fn single_project(project_json: &str) -> Project {
        let raw = parse(&with_profile(&format!(r#""projects": [{}]"#, project_json)));
        normalize_portfolio(raw).unwrap().projects.remove(0)
    }

    #[test]
    fn short_description_wins_over_legacy_and_full() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "shortDescription": "short",
                "description": "legacy", "fullDescription": "full"}"#,
        );

        assert_eq!(project.summary, "short");
        assert_eq!(project.overview, "full");
    }

    #[test]
    fn legacy_description_used_when_short_absent() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "description": "legacy", "fullDescription": "full"}"#,
        );

        assert_eq!(project.summary, "legacy");
    }

    #[test]
    fn full_description_is_last_resort_for_summary() {
        let project = single_project(r#"{"id": "p", "title": "P", "fullDescription": "full"}"#);

        assert_eq!(project.summary, "full");
        assert_eq!(project.overview, "full");
    }

    #[test]
    fn flat_technologies_preferred_over_grouped_stack() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "technologies": ["TypeScript", "Bun"],
                "techStack": [{"category": "Runtime", "technologies": ["Node.js"]}]}"#,
        );

        assert_eq!(project.technologies, vec!["TypeScript", "Bun"]);
        assert!(matches!(project.tech_stack, TechStack::Grouped { ref groups } if groups[0].category == "Runtime"));
    }

    #[test]
    fn grouped_stack_flattened_when_flat_list_absent() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "techStack": [
                {"category": "Runtime", "technologies": ["Bun", "TypeScript"]},
                {"category": "AI", "technologies": ["Groq"]}]}"#,
        );

        assert_eq!(project.technologies, vec!["Bun", "TypeScript", "Groq"]);
    }

    #[test]
    fn plain_legacy_stack_used_verbatim() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "techStack": ["React.js", "Node.js"]}"#,
        );

        assert_eq!(project.technologies, vec!["React.js", "Node.js"]);
        assert_eq!(
            project.tech_stack,
            TechStack::Plain {
                technologies: vec!["React.js".to_string(), "Node.js".to_string()]
            }
        );
    }

    #[test]
    fn missing_stack_mirrors_flat_technologies() {
        let project = single_project(r#"{"id": "p", "title": "P", "technologies": ["Rust"]}"#);

        assert_eq!(
            project.tech_stack,
            TechStack::Plain {
                technologies: vec!["Rust".to_string()]
            }
        );
    }

    #[test]
    fn mixed_features_and_achievements_keep_order_and_skip_unknown_shapes() {
        let project = single_project(
            r#"{"id": "p", "title": "P",
                "features": ["plain", {"title": "T", "description": "D", "details": ["a"]}, 7],
                "achievements": [{"metric": "95% accuracy", "description": "extraction"}, "plain", {"oops": true}]}"#,
        );

        assert_eq!(project.features.len(), 2);
        assert_eq!(project.features[0].headline(), "plain");
        assert!(matches!(
            project.features[1],
            Feature::Structured { ref title, ref details, .. } if title == "T" && details.len() == 1
        ));
        assert_eq!(project.achievements.len(), 2);
        assert_eq!(project.achievements[0].compact(), "95% accuracy: extraction");
    }

    #[test]
    fn blank_metric_achievements_are_skipped() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "achievements": [
                {"metric": "", "description": "no metric"},
                {"metric": "2x faster", "description": "  "},
                {"metric": "95% accuracy", "description": "extraction"}]}"#,
        );

        assert_eq!(project.achievements.len(), 1);
        assert_eq!(project.achievements[0].compact(), "95% accuracy: extraction");
    }

    #[test]
    fn timeline_without_organization_or_location_keeps_them_absent() {
        let raw = parse(&with_profile(
            r#""timeline": [{"id": "t", "date": "2024", "title": "T", "type": "education"}]"#,
        ));
        let entry = normalize_portfolio(raw).unwrap().timeline.remove(0);

        assert_eq!(entry.organization, None);
        assert_eq!(entry.location, None);
    }

    #[test]
    fn unrecognised_timeline_type_reports_the_value() {
        let raw = parse(&with_profile(
            r#""timeline": [{"id": "t", "date": "2024", "title": "T", "type": "volunteering"}]"#,
        ));

        assert_eq!(
            normalize_portfolio(raw).unwrap_err(),
            PortfolioLoadError::InvalidValue {
                collection: "timeline",
                index: 0,
                field: "type",
                value: "volunteering".to_string(),
            }
        );
    }

    #[test]
    fn absent_timeline_type_is_a_missing_field() {
        let raw = parse(&with_profile(
            r#""timeline": [{"id": "t", "date": "2024", "title": "T"}]"#,
        ));

        assert!(matches!(
            normalize_portfolio(raw),
            Err(PortfolioLoadError::MissingField { field: "type", .. })
        ));
    }

    #[test]
    fn unknown_tags_become_absent() {
        let project = single_project(
            r#"{"id": "p", "title": "P", "category": "game", "complexity": "advanced", "status": "done"}"#,
        );

        assert_eq!(project.category, None);
        assert_eq!(project.complexity, Some(Complexity::Advanced));
        assert_eq!(project.status, None);
    }

    #[test]
    fn experience_falls_back_to_position_and_date_range() {
        let raw = parse(&with_profile(
            r#""experience": [{"id": "e", "company": "Acme", "position": "Dev",
                "startDate": "2020", "endDate": "2021", "responsibilities": ["ship"]}]"#,
        ));
        let experience = normalize_portfolio(raw).unwrap().experience.remove(0);

        assert_eq!(experience.title, "Dev");
        assert_eq!(experience.duration.as_deref(), Some("2020 - 2021"));
    }

    #[test]
    fn open_ended_range_reads_present() {
        assert_eq!(
            resolve_duration(None, Some("2024".to_string()), None).as_deref(),
            Some("2024 - Present")
        );
        assert_eq!(resolve_duration(None, None, Some("2024".to_string())), None);
    }

    #[test]
    fn certification_and_hackathon_resolve_legacy_names() {
        let raw = parse(&with_profile(
            r#""certifications": [{"id": "c", "name": "AWS CCP", "issuer": "AWS"}],
               "hackathons": [{"id": "h", "name": "IBM CIC", "organizer": "IBM", "project": "Wise Wallet"}]"#,
        ));
        let portfolio = normalize_portfolio(raw).unwrap();

        assert_eq!(portfolio.certifications[0].title, "AWS CCP");
        assert_eq!(portfolio.hackathons[0].title, "IBM CIC");
        assert_eq!(portfolio.hackathons[0].issuer.as_deref(), Some("IBM"));
        assert_eq!(
            portfolio.hackathons[0].project.as_ref().map(|p| p.name()),
            Some("Wise Wallet")
        );
    }

    #[test]
    fn new_field_name_preferred_over_legacy() {
        let raw = parse(&with_profile(
            r#""hackathons": [{"id": "h", "title": "New", "name": "Old", "issuer": "A", "organizer": "B"}]"#,
        ));
        let hackathon = normalize_portfolio(raw).unwrap().hackathons.remove(0);

        assert_eq!(hackathon.title, "New");
        assert_eq!(hackathon.issuer.as_deref(), Some("A"));
    }

    #[test]
    fn education_details_stay_absent_when_not_authored() {
        let raw = parse(&with_profile(
            r#""education": [{"id": "ed", "institution": "Uni", "degree": "BSc"}]"#,
        ));
        let education = normalize_portfolio(raw).unwrap().education.remove(0);

        assert!(education.details.is_none());
        assert!(education.duration.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = parse(&with_profile(
            r#""projects": [{"id": "p", "title": "A"}, {"id": "p", "title": "B"}]"#,
        ));

        assert_eq!(
            normalize_portfolio(raw).unwrap_err(),
            PortfolioLoadError::DuplicateId {
                collection: "projects",
                id: "p".to_string()
            }
        );
    }

    #[test]
    fn missing_title_in_every_alias_is_rejected() {
        let raw = parse(&with_profile(r#""certifications": [{"id": "c", "issuer": "AWS"}]"#));

        assert!(matches!(
            normalize_portfolio(raw),
            Err(PortfolioLoadError::MissingField {
                collection: "certifications",
                index: 0,
                field: "title"
            })
        ));
    }

    #[test]
    fn profile_name_is_required() {
        let raw = parse(r#"{"projects": []}"#);

        assert!(matches!(
            normalize_portfolio(raw),
            Err(PortfolioLoadError::MissingField {
                collection: "profile",
                field: "name",
                ..
            })
        ));
    }
}
