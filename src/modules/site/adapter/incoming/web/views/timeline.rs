use std::fmt::Write;

use super::{card_attrs, page_section};
use crate::modules::portfolio::application::domain::entities::TimelineEntry;
use crate::shared::html::{escape, optional_paragraph};

pub(super) fn render_timeline(entries: &[TimelineEntry]) -> String {
    let mut cards = String::new();
    for entry in entries {
        let _ = write!(
            cards,
            concat!(
                r#"<div class="timeline-item timeline-{kind}" {attrs}>"#,
                r#"<span class="timeline-date">{date}</span>"#,
                r#"<div class="timeline-body"><h3>{title}</h3>"#,
                "{org}{location}</div></div>"
            ),
            kind = entry.kind,
            attrs = card_attrs("timeline", &entry.id),
            date = escape(&entry.date),
            title = escape(&entry.title),
            org = optional_paragraph(entry.organization.as_deref(), "timeline-org"),
            location = optional_paragraph(entry.location.as_deref(), "timeline-location"),
        );
    }

    page_section("timeline", "Timeline", "timeline", &cards)
}
