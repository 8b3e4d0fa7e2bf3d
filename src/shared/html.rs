// src/shared/html.rs
//
// Small markup helpers shared by the page views. Every piece of authored text
// goes through `escape` before it reaches the output.

use std::fmt::Write;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anchor that opens in a new tab.
pub fn external_link(href: &str, label: &str, class: &str) -> String {
    format!(
        r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        class,
        escape(href),
        escape(label)
    )
}

/// `<ul>` of escaped items; empty string for an empty slice.
pub fn bullet_list(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = format!(r#"<ul class="{}">"#, class);
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
    out
}

/// Row of pill-shaped tags; empty string for an empty slice.
pub fn tag_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<div class="tags">"#);
    for item in items {
        let _ = write!(out, r#"<span class="tag">{}</span>"#, escape(item));
    }
    out.push_str("</div>");
    out
}

/// A titled block, or nothing when `body` is empty.
pub fn section_block(title: &str, body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="detail-block"><h3>{}</h3>{}</section>"#,
        escape(title),
        body
    )
}

/// `<p>` for present text, nothing otherwise.
pub fn optional_paragraph(text: Option<&str>, class: &str) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => {
            format!(r#"<p class="{}">{}</p>"#, class, escape(text))
        }
        _ => String::new(),
    }
}
