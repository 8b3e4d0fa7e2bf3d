use std::fmt::Write;

use super::{card_attrs, labelled, page_section};
use crate::modules::portfolio::application::domain::entities::Certification;
use crate::shared::html::{escape, external_link, optional_paragraph, tag_list};

pub(super) fn render_certifications(certifications: &[Certification]) -> String {
    let mut cards = String::new();
    for cert in certifications {
        let _ = write!(
            cards,
            r#"<article class="card certification-card" {}><h3>{}</h3>"#,
            card_attrs("certification", &cert.id),
            escape(&cert.title)
        );
        cards.push_str(&labelled("Issued by:", Some(&cert.issuer), "issuer"));
        cards.push_str(&labelled("Issued:", cert.issue_date.as_deref(), "issue-date"));
        cards.push_str(&labelled("Expires:", cert.expiration_date.as_deref(), "expiration-date"));
        cards.push_str(&labelled("Credential ID:", cert.credential_id.as_deref(), "credential-id"));
        cards.push_str(&optional_paragraph(cert.description.as_deref(), "description"));
        cards.push_str(&tag_list(&cert.competencies));
        cards.push_str(&credential_links(
            cert.verification_url.as_deref(),
            cert.badge_url.as_deref(),
            cert.certificate_url.as_deref(),
        ));
        cards.push_str("</article>");
    }

    page_section("certifications", "Certifications", "card-list", &cards)
}

/// Verification / badge / certificate links shared with hackathon cards.
pub(super) fn credential_links(
    verification_url: Option<&str>,
    badge_url: Option<&str>,
    certificate_url: Option<&str>,
) -> String {
    let links: Vec<String> = [
        (verification_url, "Verify Credential"),
        (badge_url, "View Badge"),
        (certificate_url, "View Certificate"),
    ]
    .into_iter()
    .filter_map(|(url, label)| url.map(|url| external_link(url, label, "credential-link")))
    .collect();

    if links.is_empty() {
        return String::new();
    }
    format!(r#"<div class="card-links">{}</div>"#, links.concat())
}
