use std::fmt::Write;

use super::modal::overlay;
use super::project_card::{render_badges, render_links};
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Architecture, Feature, Project, TechStack,
};
use crate::modules::site::application::domain::Selection;
use crate::shared::html::{bullet_list, escape, optional_paragraph, section_block, tag_list};

pub(super) fn render_project_modal(project: &Project, selection: &Selection) -> String {
    let mut content = format!(
        r#"<header class="modal-header"><h2 id="project-modal-title">{}</h2>{}{}</header>"#,
        escape(&project.title),
        render_badges(project),
        render_links(project)
    );

    if let Some(image_url) = &project.image_url {
        let _ = write!(
            content,
            r#"<img class="project-image" src="{}" alt="{}">"#,
            escape(image_url),
            escape(&project.title)
        );
    }

    content.push_str(&section_block(
        "Overview",
        &optional_paragraph(Some(&project.overview), "overview"),
    ));
    content.push_str(&section_block("Tech Stack", &render_tech_stack(&project.tech_stack)));
    content.push_str(&section_block("Key Features", &render_features(&project.features)));
    if let Some(architecture) = &project.architecture {
        content.push_str(&section_block("Architecture", &render_architecture(architecture)));
    }
    content.push_str(&section_block(
        "Technical Challenges",
        &bullet_list(&project.challenges, "challenges"),
    ));
    content.push_str(&section_block(
        "Solutions",
        &bullet_list(&project.solutions, "solutions"),
    ));
    content.push_str(&section_block(
        "Achievements",
        &render_achievements(&project.achievements),
    ));
    content.push_str(&section_block(
        "Key Learnings",
        &bullet_list(&project.learnings, "learnings"),
    ));

    overlay(
        "project",
        &project.id,
        &selection.without_project().href(),
        &content,
    )
}

fn render_tech_stack(stack: &TechStack) -> String {
    match stack {
        TechStack::Plain { technologies } => tag_list(technologies),
        TechStack::Grouped { groups } => {
            let mut out = String::new();
            for group in groups.iter().filter(|g| !g.technologies.is_empty()) {
                let _ = write!(
                    out,
                    r#"<div class="tech-group"><h4>{}</h4>{}</div>"#,
                    escape(&group.category),
                    tag_list(&group.technologies)
                );
            }
            out
        }
    }
}

fn render_features(features: &[Feature]) -> String {
    if features.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<ul class="features">"#);
    for feature in features {
        match feature {
            Feature::Plain { text } => {
                let _ = write!(out, "<li>{}</li>", escape(text));
            }
            Feature::Structured {
                title,
                description,
                details,
            } => {
                let _ = write!(
                    out,
                    r#"<li class="feature-structured"><h4>{}</h4>{}{}</li>"#,
                    escape(title),
                    optional_paragraph(description.as_deref(), "feature-description"),
                    bullet_list(details, "feature-details")
                );
            }
        }
    }
    out.push_str("</ul>");
    out
}

fn render_architecture(architecture: &Architecture) -> String {
    let mut out = String::new();
    for (layer, components) in architecture.layers() {
        if components.is_empty() {
            continue;
        }
        let _ = write!(
            out,
            r#"<div class="arch-layer"><h4>{}</h4>{}</div>"#,
            layer,
            tag_list(components)
        );
    }
    out
}

/// Metric achievements keep the metric and its description in two sibling elements.
fn render_achievements(achievements: &[Achievement]) -> String {
    if achievements.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<ul class="achievements">"#);
    for achievement in achievements {
        match achievement {
            Achievement::Plain { text } => {
                let _ = write!(
                    out,
                    r#"<li class="achievement"><span class="achievement-text">{}</span></li>"#,
                    escape(text)
                );
            }
            Achievement::Metric {
                metric,
                description,
            } => {
                let _ = write!(
                    out,
                    concat!(
                        r#"<li class="achievement achievement-metric">"#,
                        r#"<span class="metric">{}</span>"#,
                        r#"<span class="metric-description">{}</span></li>"#
                    ),
                    escape(metric),
                    escape(description)
                );
            }
        }
    }
    out.push_str("</ul>");
    out
}
