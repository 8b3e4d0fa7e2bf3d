use std::fmt::Write;

use super::labelled;
use super::modal::overlay;
use crate::modules::portfolio::application::domain::entities::{
    AcademicPerformance, CourseModule, Education, EducationDetails, SkillCategory,
};
use crate::modules::site::application::domain::Selection;
use crate::shared::html::{bullet_list, escape, optional_paragraph, section_block, tag_list};

pub(super) fn render_education_modal(education: &Education, selection: &Selection) -> String {
    let mut content = format!(
        r#"<header class="modal-header"><h2 id="education-modal-title">{}</h2><p class="institution">{}</p>"#,
        escape(&education.degree),
        escape(&education.institution)
    );

    let college = education
        .details
        .as_ref()
        .and_then(|d| d.college.as_deref())
        .filter(|college| *college != education.institution);
    content.push_str(&labelled("College:", college, "college"));

    let register_number = education
        .details
        .as_ref()
        .and_then(|d| d.register_number.as_deref());
    content.push_str(&labelled("Register No:", register_number, "register-number"));
    content.push_str(&labelled("Duration:", education.duration.as_deref(), "duration"));
    content.push_str(&labelled("Location:", education.location.as_deref(), "location"));
    content.push_str(&labelled("Grade:", education.grade.as_deref(), "grade"));
    content.push_str("</header>");

    content.push_str(&optional_paragraph(education.description.as_deref(), "description"));

    if let Some(details) = &education.details {
        content.push_str(&render_details(details));
    }

    overlay(
        "education",
        &education.id,
        &selection.without_education().href(),
        &content,
    )
}

fn render_details(details: &EducationDetails) -> String {
    let mut out = String::new();

    out.push_str(&section_block(
        "Overview",
        &optional_paragraph(details.overview.as_deref(), "overview"),
    ));
    if let Some(performance) = &details.academic_performance {
        out.push_str(&section_block(
            "Academic Performance",
            &render_performance(performance),
        ));
    }
    out.push_str(&section_block("Core Modules", &render_modules(&details.core_modules)));
    out.push_str(&section_block(
        "Core Technical Skills",
        &render_skills(&details.core_skills),
    ));
    out.push_str(&section_block(
        "Technologies & Tools",
        &tag_list(&details.technologies),
    ));
    out.push_str(&section_block(
        "Laboratory Experience",
        &bullet_list(&details.laboratory_experience, "laboratory"),
    ));
    out.push_str(&section_block(
        "Project Work",
        &bullet_list(&details.project_work, "project-work"),
    ));
    out.push_str(&section_block(
        "Achievements",
        &bullet_list(&details.achievements, "achievements"),
    ));

    out
}

fn render_performance(performance: &AcademicPerformance) -> String {
    let rows = [
        ("Overall CGPA:", performance.overall_cgpa.as_deref()),
        ("Classification:", performance.classification.as_deref()),
        ("Peak SGPA:", performance.peak_sgpa.as_deref()),
        ("Consistent Performance:", performance.consistent_performance.as_deref()),
    ];

    let body: String = rows
        .into_iter()
        .map(|(label, value)| labelled(label, value, "performance-row"))
        .collect();

    if body.is_empty() {
        return body;
    }
    format!(r#"<div class="performance-grid">{}</div>"#, body)
}

fn render_modules(modules: &[CourseModule]) -> String {
    if modules.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<div class="module-grid">"#);
    for module in modules {
        let _ = write!(out, r#"<div class="module-card"><h4>{}</h4>"#, escape(&module.name));
        if let Some(credits) = module.credits {
            let _ = write!(out, r#"<span class="module-credits">{} credits</span>"#, credits);
        }
        if let Some(grade) = &module.grade {
            let _ = write!(out, r#"<span class="module-grade">{}</span>"#, escape(grade));
        }
        out.push_str(&optional_paragraph(module.description.as_deref(), "module-description"));
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn render_skills(categories: &[SkillCategory]) -> String {
    let mut out = String::new();
    for category in categories.iter().filter(|c| !c.skills.is_empty()) {
        let _ = write!(
            out,
            r#"<div class="skill-group"><h4>{}</h4>{}</div>"#,
            escape(&category.category),
            tag_list(&category.skills)
        );
    }
    out
}
