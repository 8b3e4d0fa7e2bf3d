use std::fmt::Write;

use crate::modules::portfolio::application::domain::entities::Profile;
use crate::shared::html::escape;

pub(super) fn render_header(profile: &Profile) -> String {
    let mut out = format!(
        r#"<header class="heading"><h1><span class="hi">Hi, I'm </span><span class="name">{}</span></h1>"#,
        escape(&profile.name)
    );

    if let Some(designation) = &profile.designation {
        let _ = write!(out, r#"<h3 class="designation">{}</h3>"#, escape(designation));
    }

    if !profile.about.is_empty() {
        out.push_str(r#"<div class="about">"#);
        for paragraph in &profile.about {
            let _ = write!(out, "<p>{}</p>", escape(paragraph));
        }
        out.push_str("</div>");
    }

    if !profile.links.is_empty() || profile.resume_url.is_some() {
        out.push_str(r#"<nav class="links">"#);
        for link in &profile.links {
            let _ = write!(
                out,
                r#"<a class="social-link" href="{}" target="_blank" rel="noopener noreferrer" title="{}"{}>{}</a>"#,
                escape(&link.url),
                escape(&link.label),
                link.icon
                    .as_deref()
                    .map(|icon| format!(r#" data-icon="{}""#, escape(icon)))
                    .unwrap_or_default(),
                escape(&link.label)
            );
        }
        if let Some(resume_url) = &profile.resume_url {
            let _ = write!(
                out,
                r#"<a class="resume-btn" href="{}" target="_blank" rel="noopener noreferrer">Resume</a>"#,
                escape(resume_url)
            );
        }
        out.push_str("</nav>");
    }

    out.push_str("</header>");
    out
}
