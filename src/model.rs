//! Data model for parsed documentation — format-agnostic.

use serde::Serialize;

/// Sentinel name of the implicit section before the first `###` heading.
pub const PRELUDE: &str = "Prelude";

/// File-level metadata collected from the leading comment block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    /// DOC_TITLE (first one wins)
    pub title: Option<String>,
    /// DOC_SUMMARY / DOC_BLURB (first one wins)
    pub summary: Option<String>,
    /// DOC_NOTE / DOC_NOTES, in source order
    pub notes: Vec<String>,
    /// DOC_LINK / DOC_LINKS, in source order (raw text)
    pub links: Vec<String>,
}

/// Heading of a raw section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionHeading {
    /// Content before the first explicit heading.
    Prelude,
    /// Text of a `### ...` line.
    Named(String),
}

impl SectionHeading {
    pub fn is_prelude(&self) -> bool {
        matches!(self, SectionHeading::Prelude)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SectionHeading::Prelude => PRELUDE,
            SectionHeading::Named(text) => text,
        }
    }
}

/// Output of the sectioner, before prose and code are separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub heading: SectionHeading,
    /// DOC_STEP_SUMMARY bound to this section, directly under its heading
    /// or pending from before it.
    pub step_summary: Option<String>,
    /// Every non-tag line up to the next heading, verbatim.
    pub body: Vec<String>,
}

/// A raw section split into narrative prose and code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinedSection {
    /// Leading comment lines with markers removed; no trailing blanks.
    pub prose: Vec<String>,
    /// Remaining lines with inline comments stripped.
    pub code: Vec<String>,
}

impl RefinedSection {
    pub fn is_empty(&self) -> bool {
        self.prose.is_empty() && self.code.is_empty()
    }
}

/// One numbered, rendering-ready step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based, contiguous over retained steps.
    pub index: usize,
    /// Heading with any embedded enumeration prefix removed.
    pub heading: String,
    /// Declared step summary, or the synthesized fallback sentence.
    pub summary_text: String,
    /// True when `summary_text` came from a DOC_STEP_SUMMARY tag.
    pub summary_declared: bool,
    pub prose: Vec<String>,
    /// Code lines joined by `\n`, surrounding blank lines removed.
    pub code_snippet: String,
}

/// A parsed DOC_LINKS entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub raw: String,
    pub text: String,
    /// `None` when the entry has no recognizable target.
    pub url: Option<String>,
}

impl ResourceLink {
    pub fn is_malformed(&self) -> bool {
        self.url.is_none()
    }
}

/// Complete documentation model for one annotated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub steps: Vec<Step>,
    pub resources: Vec<ResourceLink>,
    /// Original source with every tag line removed.
    pub source: String,
}

impl Document {
    /// The title; always present on an assembled document.
    pub fn title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or_default()
    }
}
