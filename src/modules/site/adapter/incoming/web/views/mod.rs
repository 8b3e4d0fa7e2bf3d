// One renderer per page section. Renderers are pure: records in, markup out.
// A card is emitted for every record in authored order; absent fields simply
// leave their fragment out.

mod certification;
mod education;
mod education_modal;
mod experience;
mod hackathon;
mod header;
mod layout;
mod modal;
mod project_card;
mod project_modal;
mod timeline;

pub use layout::{render_error_page, render_home_page};

use crate::shared::html::escape;

/// `id` and `data-key` attributes shared by every card. Card ids carry a
/// `-card-` infix so they never clash with an overlay's `<kind>-modal` id.
fn card_attrs(section: &str, id: &str) -> String {
    let id = escape(id);
    format!(r#"id="{}-card-{}" data-key="{}""#, section, id, id)
}

/// `<section>` wrapper with a heading; nothing for an empty collection.
fn page_section(id: &str, title: &str, list_class: &str, cards: &str) -> String {
    if cards.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="section" id="{}"><h2>{}</h2><div class="{}">{}</div></section>"#,
        id,
        escape(title),
        list_class,
        cards
    )
}

/// Labelled line such as `Duration: 2023 - 2024`; nothing when absent.
fn labelled(label: &str, value: Option<&str>, class: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => format!(
            r#"<p class="{}"><strong>{}</strong> {}</p>"#,
            class,
            escape(label),
            escape(value)
        ),
        _ => String::new(),
    }
}
