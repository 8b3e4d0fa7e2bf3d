use std::fmt::Write;

use super::{card_attrs, labelled, page_section};
use crate::modules::portfolio::application::domain::entities::Experience;
use crate::shared::html::{bullet_list, escape, external_link, optional_paragraph, tag_list};

pub(super) fn render_experience(experiences: &[Experience]) -> String {
    let mut cards = String::new();
    for experience in experiences {
        let _ = write!(
            cards,
            r#"<article class="card experience-card" {}>"#,
            card_attrs("experience", &experience.id)
        );
        let _ = write!(cards, "<h3>{}</h3>", escape(&experience.title));

        match experience.company_website.as_deref() {
            Some(website) => {
                let _ = write!(
                    cards,
                    r#"<p class="company"><strong>Company:</strong> {}</p>"#,
                    external_link(website, &experience.company, "company-link")
                );
            }
            None => cards.push_str(&labelled("Company:", Some(&experience.company), "company")),
        }

        cards.push_str(&labelled("Duration:", experience.duration.as_deref(), "duration"));
        cards.push_str(&labelled("Location:", experience.location.as_deref(), "location"));
        cards.push_str(&optional_paragraph(
            experience.company_description.as_deref(),
            "company-description",
        ));
        cards.push_str(&bullet_list(&experience.responsibilities, "responsibilities"));

        let achievements: Vec<String> = experience
            .achievements
            .iter()
            .map(|a| a.compact())
            .collect();
        cards.push_str(&bullet_list(&achievements, "achievements"));
        cards.push_str(&bullet_list(&experience.impact, "impact"));
        cards.push_str(&tag_list(&experience.technologies));
        cards.push_str(&tag_list(&experience.skills));
        cards.push_str("</article>");
    }

    page_section("experience", "Experience", "card-list", &cards)
}
