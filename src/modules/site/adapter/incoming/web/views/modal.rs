use crate::shared::html::escape;

/// Detail overlay frame.
///
/// The backdrop is an anchor laid out behind the content region and is a
/// sibling of it, so activating anything inside the content never reaches the
/// backdrop. The backdrop and the close control both link to `close_href`.
pub(super) fn overlay(kind: &str, record_id: &str, close_href: &str, content: &str) -> String {
    let close_href = escape(close_href);
    format!(
        concat!(
            r#"<div class="modal-overlay" id="{kind}-modal" data-key="{key}" role="dialog" aria-modal="true" aria-labelledby="{kind}-modal-title">"#,
            r#"<a class="modal-backdrop" href="{close}" aria-label="Close"></a>"#,
            r#"<div class="modal-content">"#,
            r#"<a class="modal-close" href="{close}" aria-label="Close">&times;</a>"#,
            "{content}",
            "</div></div>"
        ),
        kind = kind,
        key = escape(record_id),
        close = close_href,
        content = content,
    )
}
