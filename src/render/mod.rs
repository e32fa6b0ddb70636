//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::{Document, Step};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Page context that is not part of the Document itself.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Source path relative to the input root.
    pub source: String,
    pub generated: NaiveDate,
    /// Language tag for fenced code blocks.
    pub code_language: String,
}

impl PageInfo {
    pub fn new(source: impl Into<String>, code_language: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generated: chrono::Local::now().date_naive(),
            code_language: code_language.into(),
        }
    }
}

/// Trait for rendering a Document into a specific output format.
pub trait Renderer: Sync {
    fn render(&self, doc: &Document, page: &PageInfo) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// Text blocks shown under a step heading.
///
/// A declared summary comes first and is followed by the prose. Without
/// one, the prose stands alone and the fallback sentence is used only
/// when there is no prose either.
pub(crate) fn step_text(step: &Step) -> Vec<String> {
    let prose = step.prose.join("\n");
    let mut blocks = Vec::new();
    if step.summary_declared {
        blocks.push(step.summary_text.clone());
        if !prose.trim().is_empty() {
            blocks.push(prose);
        }
    } else if !prose.trim().is_empty() {
        blocks.push(prose);
    } else {
        blocks.push(step.summary_text.clone());
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(summary: &str, declared: bool, prose: &[&str]) -> Step {
        Step {
            index: 1,
            heading: "H".into(),
            summary_text: summary.into(),
            summary_declared: declared,
            prose: prose.iter().map(|s| s.to_string()).collect(),
            code_snippet: String::new(),
        }
    }

    #[test]
    fn declared_summary_then_prose() {
        assert_eq!(step_text(&step("S", true, &["p1", "p2"])), vec!["S", "p1\np2"]);
    }

    #[test]
    fn prose_replaces_fallback() {
        assert_eq!(step_text(&step("This step covers h.", false, &["p"])), vec!["p"]);
    }

    #[test]
    fn fallback_when_nothing_else() {
        assert_eq!(
            step_text(&step("This step covers h.", false, &[])),
            vec!["This step covers h."]
        );
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn extensions() {
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("html").unwrap().file_extension(), "html");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }
}
