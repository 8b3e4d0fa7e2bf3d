use std::fmt::Write;

use super::certification::credential_links;
use super::{card_attrs, labelled, page_section};
use crate::modules::portfolio::application::domain::entities::{Hackathon, HackathonProject};
use crate::shared::html::{bullet_list, escape, external_link, optional_paragraph, tag_list};

pub(super) fn render_hackathons(hackathons: &[Hackathon]) -> String {
    let mut cards = String::new();
    for hackathon in hackathons {
        let _ = write!(
            cards,
            r#"<article class="card hackathon-card" {}><h3>{}</h3>"#,
            card_attrs("hackathon", &hackathon.id),
            escape(&hackathon.title)
        );
        cards.push_str(&labelled("Issued by:", hackathon.issuer.as_deref(), "issuer"));
        cards.push_str(&labelled("Date:", hackathon.date.as_deref(), "date"));
        cards.push_str(&labelled("Location:", hackathon.location.as_deref(), "location"));
        cards.push_str(&labelled("Achievement:", hackathon.achievement.as_deref(), "achievement"));

        if let Some(project) = &hackathon.project {
            cards.push_str(&render_project(project));
        }

        cards.push_str(&optional_paragraph(hackathon.description.as_deref(), "description"));
        cards.push_str(&tag_list(&hackathon.skills));
        cards.push_str(&credential_links(
            None,
            hackathon.badge_url.as_deref(),
            hackathon.certificate_url.as_deref(),
        ));
        cards.push_str("</article>");
    }

    page_section("hackathons", "Hackathons", "card-list", &cards)
}

fn render_project(project: &HackathonProject) -> String {
    match project {
        HackathonProject::Named { name } => labelled("Project:", Some(name), "hackathon-project"),
        HackathonProject::Detailed {
            name,
            description,
            live_url,
            features,
            technologies,
            impact,
        } => {
            let mut out = String::from(r#"<div class="hackathon-project">"#);
            out.push_str(&labelled("Project:", Some(name), "hackathon-project-name"));
            out.push_str(&optional_paragraph(description.as_deref(), "description"));
            if let Some(url) = live_url {
                out.push_str(&external_link(url, "Live Demo", "live-link"));
            }
            out.push_str(&bullet_list(features, "features"));
            out.push_str(&tag_list(technologies));
            out.push_str(&bullet_list(impact, "impact"));
            out.push_str("</div>");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hackathon(project: Option<HackathonProject>) -> Hackathon {
        Hackathon {
            id: "ibm-cic-hackathon".to_string(),
            title: "IBM CIC Hackathon".to_string(),
            project,
            description: None,
            issuer: Some("IBM".to_string()),
            date: None,
            location: None,
            achievement: None,
            skills: vec![],
            badge_url: None,
            certificate_url: None,
        }
    }

    #[test]
    fn named_project_renders_its_name_only() {
        let html = render_hackathons(&[hackathon(Some(HackathonProject::Named {
            name: "Wise Wallet".to_string(),
        }))]);

        assert!(html.contains(r#"id="hackathon-card-ibm-cic-hackathon""#));
        assert!(html.contains("Wise Wallet"));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn detailed_project_renders_its_extras() {
        let html = render_hackathons(&[hackathon(Some(HackathonProject::Detailed {
            name: "Wise Wallet".to_string(),
            description: Some("Budgeting app".to_string()),
            live_url: Some("https://wise.test".to_string()),
            features: vec!["Expense tracking".to_string()],
            technologies: vec!["React".to_string()],
            impact: vec![],
        }))]);

        assert!(html.contains("Budgeting app"));
        assert!(html.contains(r#"href="https://wise.test""#));
        assert!(html.contains("<li>Expense tracking</li>"));
        assert!(!html.contains(r#"class="impact""#));
    }

    #[test]
    fn missing_project_is_omitted() {
        let html = render_hackathons(&[hackathon(None)]);

        assert!(!html.contains("Project:"));
        assert!(html.contains("IBM"));
    }
}
