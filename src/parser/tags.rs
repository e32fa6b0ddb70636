//! `DOC_*` metadata tag recognition.
//!
//! Tags are single comment lines starting at column 0, e.g.
//! `# DOC_TITLE: Fibonacci`. The keyword is case-insensitive and the
//! payload must contain at least one non-blank character.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*DOC_TITLE:\s*(.*\S)").unwrap());

static RE_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*DOC_(?:SUMMARY|BLURB):\s*(.*\S)").unwrap());

static RE_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*DOC_NOTES?:\s*(.*\S)").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*DOC_LINKS?:\s*(.*\S)").unwrap());

static RE_STEP_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*DOC_STEP_SUMMARY:\s*(.*\S)").unwrap());

/// Recognized metadata tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Title,
    Summary,
    Note,
    Link,
    StepSummary,
}

/// Checked in this order; the patterns are disjoint so order only
/// matters for speed.
static PATTERNS: [(Tag, &LazyLock<Regex>); 5] = [
    (Tag::Title, &RE_TITLE),
    (Tag::Summary, &RE_SUMMARY),
    (Tag::Note, &RE_NOTE),
    (Tag::Link, &RE_LINK),
    (Tag::StepSummary, &RE_STEP_SUMMARY),
];

/// A tag line split into its kind and trimmed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    pub tag: Tag,
    pub payload: &'a str,
}

/// Match a line against every tag pattern.
pub fn match_tag(line: &str) -> Option<TagLine<'_>> {
    PATTERNS.iter().find_map(|(tag, re)| {
        re.captures(line).and_then(|caps| {
            caps.get(1).map(|m| TagLine {
                tag: *tag,
                payload: m.as_str().trim(),
            })
        })
    })
}

/// True for any of the five tag kinds.
pub fn is_tag_line(line: &str) -> bool {
    match_tag(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(line: &str) -> Option<(Tag, &str)> {
        match_tag(line).map(|t| (t.tag, t.payload))
    }

    #[test]
    fn title() {
        assert_eq!(tag_of("# DOC_TITLE: Hello"), Some((Tag::Title, "Hello")));
        assert_eq!(tag_of("#DOC_TITLE:Hello  "), Some((Tag::Title, "Hello")));
    }

    #[test]
    fn case_insensitive_keyword() {
        assert_eq!(tag_of("# doc_title: Hello"), Some((Tag::Title, "Hello")));
        assert_eq!(tag_of("# Doc_Links: x"), Some((Tag::Link, "x")));
    }

    #[test]
    fn summary_aliases() {
        assert_eq!(tag_of("# DOC_SUMMARY: S"), Some((Tag::Summary, "S")));
        assert_eq!(tag_of("# DOC_BLURB: B"), Some((Tag::Summary, "B")));
    }

    #[test]
    fn singular_and_plural() {
        assert_eq!(tag_of("# DOC_NOTE: n"), Some((Tag::Note, "n")));
        assert_eq!(tag_of("# DOC_NOTES: n"), Some((Tag::Note, "n")));
        assert_eq!(tag_of("# DOC_LINK: l"), Some((Tag::Link, "l")));
        assert_eq!(tag_of("# DOC_LINKS: l"), Some((Tag::Link, "l")));
    }

    #[test]
    fn step_summary_is_not_a_summary() {
        assert_eq!(
            tag_of("# DOC_STEP_SUMMARY: does a thing"),
            Some((Tag::StepSummary, "does a thing"))
        );
    }

    #[test]
    fn empty_payload_is_not_a_tag() {
        assert_eq!(tag_of("# DOC_TITLE:"), None);
        assert_eq!(tag_of("# DOC_TITLE:    "), None);
    }

    #[test]
    fn must_start_at_column_zero() {
        assert_eq!(tag_of("    # DOC_TITLE: Hello"), None);
        assert_eq!(tag_of("x = 1  # DOC_TITLE: Hello"), None);
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(tag_of("# DOC_STEPS: one, two"), None);
        assert_eq!(tag_of("# plain comment"), None);
    }
}
