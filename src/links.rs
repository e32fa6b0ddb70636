//! DOC_LINKS parsing and heading anchors.

use crate::model::ResourceLink;
use regex::Regex;
use std::sync::LazyLock;

static RE_MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\((\S+)\)$").unwrap());

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?|ftp)://[^\s<>()]+").unwrap());

/// Parse one DOC_LINKS entry.
///
/// Accepts `[text](url)`, free text followed by a URL, a bare URL, or a
/// relative path. Anything else comes back with `url: None`.
pub fn parse_link(raw: &str) -> ResourceLink {
    let raw = raw.trim();

    if let Some(caps) = RE_MARKDOWN_LINK.captures(raw) {
        return ResourceLink {
            raw: raw.to_string(),
            text: caps[1].trim().to_string(),
            url: Some(caps[2].to_string()),
        };
    }

    if is_relative(raw) && !raw.contains(char::is_whitespace) {
        return ResourceLink {
            raw: raw.to_string(),
            text: raw.to_string(),
            url: Some(raw.to_string()),
        };
    }

    if let Some(m) = RE_URL.find(raw) {
        let url = m.as_str().trim_end_matches(['.', ',', ';']);
        let before = raw[..m.start()].trim_end_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | ':' | '|' | '–' | '—')
        });
        let after = raw[m.start() + url.len()..].trim();
        let text = match (before.is_empty(), after.is_empty()) {
            (true, true) => url.to_string(),
            (false, _) => before.to_string(),
            (true, false) => after.to_string(),
        };
        return ResourceLink {
            raw: raw.to_string(),
            text,
            url: Some(url.to_string()),
        };
    }

    ResourceLink {
        raw: raw.to_string(),
        text: raw.to_string(),
        url: None,
    }
}

fn is_relative(text: &str) -> bool {
    text.starts_with('/') || text.starts_with("./") || text.starts_with("../")
}

/// True when the target can be probed over the network.
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Markdown list entry for a resource.
pub fn render_link_item(link: &ResourceLink) -> String {
    match &link.url {
        Some(url) if link.text == *url => format!("* <{}>", url),
        Some(url) => format!("* [{}]({})", link.text, url),
        None => format!("* {}", link.raw),
    }
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - keep alphanumerics, spaces and hyphens, drop everything else
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
