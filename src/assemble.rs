//! Turn metadata and raw sections into a numbered, rendering-ready Document.

use crate::error::BuildError;
use crate::links;
use crate::model::{Document, DocumentMetadata, RawSection, RefinedSection, Step};
use crate::parser::{classify, refine};
use crate::summary;
use regex::Regex;
use std::sync::LazyLock;

// "Step 3: ", "step 3 - ", "3. ", "3) "
static RE_ENUM_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:step\s*\d+\s*[:.)\-–]\s*|\d+[.)]\s+)").unwrap()
});

/// Build the Document.
///
/// Fails only when the metadata has no title. `source` is the full
/// source with tag lines already removed.
pub fn assemble(
    metadata: DocumentMetadata,
    sections: Vec<RawSection>,
    source: String,
) -> Result<Document, BuildError> {
    if metadata.title.is_none() {
        return Err(BuildError::MissingTitle);
    }

    let mut refined: Vec<(RawSection, RefinedSection)> = sections
        .into_iter()
        .map(|raw| {
            let r = refine::refine(&raw.body);
            (raw, r)
        })
        .collect();

    if refined
        .first()
        .is_some_and(|(raw, r)| raw.heading.is_prelude() && !has_real_code(&r.code))
    {
        refined.remove(0);
    }

    let steps = refined
        .into_iter()
        .filter(|(_, r)| !r.is_empty())
        .enumerate()
        .map(|(i, (raw, r))| build_step(i + 1, raw, r))
        .collect();

    let resources = metadata
        .links
        .iter()
        .map(|raw| links::parse_link(raw))
        .collect();

    Ok(Document {
        metadata,
        steps,
        resources,
        source,
    })
}

fn build_step(index: usize, raw: RawSection, refined: RefinedSection) -> Step {
    let heading = clean_heading(raw.heading.as_str()).to_string();
    let (summary_text, summary_declared) = match raw.step_summary {
        Some(declared) => (declared, true),
        None => (summary::fallback_summary(&heading), false),
    };
    Step {
        index,
        heading,
        summary_text,
        summary_declared,
        code_snippet: snippet(&refined.code),
        prose: refined.prose,
    }
}

/// Any line that is neither blank nor a comment.
fn has_real_code(code: &[String]) -> bool {
    code.iter()
        .any(|l| !classify::is_blank(l) && !classify::is_comment(l))
}

/// Remove an enumeration prefix such as `Step 2: ` or `2. `.
///
/// A heading that is nothing but a prefix is kept as written.
pub fn clean_heading(heading: &str) -> &str {
    let heading = heading.trim();
    match RE_ENUM_PREFIX.find(heading) {
        Some(m) if m.end() < heading.len() => heading[m.end()..].trim_start(),
        _ => heading,
    }
}

/// Join code lines, dropping blank lines at either end.
fn snippet(code: &[String]) -> String {
    let start = code.iter().position(|l| !l.trim().is_empty());
    let end = code.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => code[start..=end].join("\n"),
        _ => String::new(),
    }
}
