use std::fmt::Write;

use super::{card_attrs, labelled, page_section};
use crate::modules::portfolio::application::domain::entities::Education;
use crate::modules::site::application::domain::Selection;
use crate::shared::html::{escape, optional_paragraph};

/// Education cards. Each card's open link keeps whatever else is selected.
pub(super) fn render_education(records: &[Education], selection: &Selection) -> String {
    let mut cards = String::new();
    for education in records {
        let open_href = selection.with_education(&education.id).href();
        let _ = write!(
            cards,
            concat!(
                r#"<article class="card education-card clickable" {attrs}>"#,
                r#"<a class="card-open" href="{href}" aria-label="View details for {degree}"></a>"#,
                "<h3>{degree}</h3>",
                r#"<p class="institution">{institution}</p>"#
            ),
            attrs = card_attrs("education", &education.id),
            href = escape(&open_href),
            degree = escape(&education.degree),
            institution = escape(&education.institution),
        );
        cards.push_str(&labelled("Duration:", education.duration.as_deref(), "duration"));
        cards.push_str(&labelled("Location:", education.location.as_deref(), "location"));
        cards.push_str(&labelled("Grade:", education.grade.as_deref(), "grade"));
        cards.push_str(&optional_paragraph(education.description.as_deref(), "description"));
        cards.push_str(r#"<span class="card-hint">Click to view details</span></article>"#);
    }

    page_section("education", "Education", "card-list", &cards)
}
