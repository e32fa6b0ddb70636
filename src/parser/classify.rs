//! Stateless line classification shared by every parser pass.

use super::tags::{self, TagLine};
use regex::Regex;
use std::sync::LazyLock;

/// Comment marker of annotated sources.
pub const COMMENT_MARKER: char = '#';

// `### Heading text`: three markers, whitespace, then non-blank text.
static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*###\s+(\S.*)$").unwrap());

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").unwrap());

/// What a single source line is, evaluated in this priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Tag(TagLine<'a>),
    Heading(&'a str),
    Blank,
    Comment,
    Code,
}

/// Classify one line.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(tag) = tags::match_tag(line) {
        return LineKind::Tag(tag);
    }
    if let Some(text) = heading_text(line) {
        return LineKind::Heading(text);
    }
    if RE_BLANK.is_match(line) {
        return LineKind::Blank;
    }
    if is_comment(line) {
        return LineKind::Comment;
    }
    LineKind::Code
}

/// Heading payload of a `### ...` line, trimmed.
pub fn heading_text(line: &str) -> Option<&str> {
    RE_HEADING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Starts with the comment marker after leading whitespace.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

pub fn is_blank(line: &str) -> bool {
    RE_BLANK.is_match(line)
}

/// Remove leading whitespace and comment markers from a comment line.
pub fn strip_comment_markers(line: &str) -> String {
    line.trim_start()
        .trim_start_matches([COMMENT_MARKER, ' '])
        .trim_end()
        .to_string()
}
