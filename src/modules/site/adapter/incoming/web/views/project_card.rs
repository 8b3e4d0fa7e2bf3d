use std::fmt::Write;

use super::{card_attrs, page_section};
use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::site::application::domain::Selection;
use crate::shared::html::{bullet_list, escape, external_link, optional_paragraph, tag_list};

pub(super) fn render_projects(projects: &[Project], selection: &Selection) -> String {
    let mut cards = String::new();
    for project in projects {
        cards.push_str(&render_project_card(project, selection));
    }

    page_section("projects", "Projects", "project-list", &cards)
}

/// A project card.
///
/// The open action is an empty anchor stretched over the card. The repository
/// and live-demo anchors are its siblings, stacked above it, never its
/// descendants.
fn render_project_card(project: &Project, selection: &Selection) -> String {
    let mut card = String::new();
    let _ = write!(
        card,
        concat!(
            r#"<article class="card project-card clickable" {attrs}>"#,
            r#"<a class="card-open" href="{href}" aria-label="View details for {title}"></a>"#,
            "<h3>{title}</h3>"
        ),
        attrs = card_attrs("project", &project.id),
        href = escape(&selection.with_project(&project.id).href()),
        title = escape(&project.title),
    );

    card.push_str(&render_badges(project));
    card.push_str(&optional_paragraph(Some(&project.summary), "summary"));

    if !project.technologies.is_empty() {
        let _ = write!(
            card,
            r#"<div class="tech-stack"><strong>Tech Stack:</strong>{}</div>"#,
            tag_list(&project.technologies)
        );
    }

    let features: Vec<String> = project
        .features
        .iter()
        .map(|f| f.headline().to_string())
        .collect();
    card.push_str(&bullet_list(&features, "features"));

    let achievements: Vec<String> = project.achievements.iter().map(|a| a.compact()).collect();
    card.push_str(&bullet_list(&achievements, "achievements"));

    card.push_str(&render_links(project));
    card.push_str(r#"<span class="card-hint">Click to view details</span></article>"#);
    card
}

/// Category / complexity / status pills; nothing when all are absent.
pub(super) fn render_badges(project: &Project) -> String {
    let mut badges = String::new();
    if let Some(category) = project.category {
        let _ = write!(
            badges,
            r#"<span class="badge badge-category">{}</span>"#,
            escape(&category.to_string())
        );
    }
    if let Some(complexity) = project.complexity {
        let _ = write!(
            badges,
            r#"<span class="badge badge-complexity">{}</span>"#,
            complexity
        );
    }
    if let Some(status) = project.status {
        let _ = write!(badges, r#"<span class="badge badge-status">{}</span>"#, status);
    }

    if badges.is_empty() {
        return badges;
    }
    format!(r#"<div class="badges">{}</div>"#, badges)
}

pub(super) fn render_links(project: &Project) -> String {
    let mut links = String::new();
    if let Some(url) = &project.repository_url {
        links.push_str(&external_link(url, "GitHub", "repo-link"));
    }
    if let Some(url) = &project.live_url {
        links.push_str(&external_link(url, "Live Demo", "live-link"));
    }

    if links.is_empty() {
        return links;
    }
    format!(r#"<div class="card-links">{}</div>"#, links)
}
