use chrono::{Datelike, Utc};

use super::certification::render_certifications;
use super::education::render_education;
use super::education_modal::render_education_modal;
use super::experience::render_experience;
use super::hackathon::render_hackathons;
use super::header::render_header;
use super::project_card::render_projects;
use super::project_modal::render_project_modal;
use super::timeline::render_timeline;
use crate::modules::site::application::domain::HomePage;
use crate::shared::html::escape;

const STYLES: &str = r#"
:root { --fg: #1f2933; --muted: #52606d; --accent: #2563eb; --card: #ffffff; --bg: #f5f7fa; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--fg); background: var(--bg); line-height: 1.5; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.heading .name { color: var(--accent); }
.links { display: flex; gap: .75rem; flex-wrap: wrap; margin-top: 1rem; }
.social-link, .resume-btn { color: var(--accent); text-decoration: none; font-weight: 600; }
.section { margin-top: 3rem; }
.card-list, .project-list { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }
.card { position: relative; background: var(--card); border-radius: 12px; padding: 1.25rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.card.clickable:hover { box-shadow: 0 4px 12px rgba(0,0,0,.12); }
.card-open { position: absolute; inset: 0; z-index: 1; border-radius: inherit; }
.card-links { position: relative; z-index: 2; display: flex; gap: .75rem; margin-top: .75rem; }
.card-hint { display: block; margin-top: .75rem; color: var(--muted); font-size: .85rem; }
.tags { display: flex; flex-wrap: wrap; gap: .4rem; margin: .5rem 0; }
.tag, .badge { background: #e4e7eb; border-radius: 999px; padding: .1rem .6rem; font-size: .8rem; }
.badges { display: flex; gap: .4rem; }
.timeline { border-left: 2px solid var(--accent); padding-left: 1rem; }
.timeline-item { margin-bottom: 1.25rem; }
.timeline-date { color: var(--muted); font-size: .9rem; }
.modal-overlay { position: fixed; inset: 0; z-index: 10; display: flex; align-items: center; justify-content: center; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(15,23,42,.6); }
.modal-content { position: relative; max-width: 860px; width: 92%; max-height: 88vh; overflow-y: auto; background: var(--card); border-radius: 14px; padding: 2rem; }
.modal-close { position: absolute; top: 1rem; right: 1.25rem; font-size: 1.75rem; text-decoration: none; color: var(--muted); }
.project-image { width: 100%; border-radius: 10px; margin: 1rem 0; }
.module-grid { display: grid; gap: .75rem; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); }
.module-card { border: 1px solid #e4e7eb; border-radius: 10px; padding: .75rem; }
.module-credits, .module-grade { margin-right: .5rem; font-size: .85rem; color: var(--muted); }
.metric { font-weight: 700; color: var(--accent); margin-right: .5rem; }
footer { margin-top: 4rem; text-align: center; color: var(--muted); }
"#;

/// Full page: header, every non-empty section, then whichever overlays the selection opens.
pub fn render_home_page(page: &HomePage) -> String {
    render_document(page, Utc::now().year())
}

fn render_document(page: &HomePage, year: i32) -> String {
    let portfolio = &page.portfolio;

    let mut body = String::new();
    body.push_str(&render_header(&portfolio.profile));
    body.push_str(&render_timeline(&portfolio.timeline));
    body.push_str(&render_experience(&portfolio.experience));
    body.push_str(&render_education(&portfolio.education, &page.selection));
    body.push_str(&render_certifications(&portfolio.certifications));
    body.push_str(&render_hackathons(&portfolio.hackathons));
    body.push_str(&render_projects(&portfolio.projects, &page.selection));

    if let Some(project) = &page.selected_project {
        body.push_str(&render_project_modal(project, &page.selection));
    }
    if let Some(education) = &page.selected_education {
        body.push_str(&render_education_modal(education, &page.selection));
    }

    let name = escape(&portfolio.profile.name);
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{name}</title><style>{styles}</style></head>",
            r#"<body><div class="container">{body}"#,
            "<footer><p>&copy; {year} {name}. All rights reserved.</p></footer>",
            "</div></body></html>"
        ),
        name = name,
        styles = STYLES,
        body = body,
        year = year,
    )
}

/// Minimal page for failures while composing the home page.
pub fn render_error_page() -> String {
    concat!(
        "<!DOCTYPE html>",
        r#"<html lang="en"><head><meta charset="utf-8"><title>Something went wrong</title></head>"#,
        "<body><h1>Something went wrong</h1>",
        r#"<p>The page could not be rendered. Please try again later.</p><p><a href="/">Back to home</a></p>"#,
        "</body></html>"
    )
    .to_string()
}
