//! Parser module — annotated source to Document.
//!
//! Pipeline: tag metadata and sections are read from the same lines, each
//! section is refined into prose and code, then the assembler numbers the
//! surviving sections.

pub mod classify;
pub mod metadata;
pub mod quote;
pub mod refine;
pub mod sections;
pub mod tags;

use crate::assemble;
use crate::error::BuildError;
use crate::model::Document;

/// Parse a whole source text.
pub fn parse(input: &str) -> Result<Document, BuildError> {
    let lines: Vec<&str> = input.lines().collect();
    parse_lines(&lines)
}

/// Parse an already split source.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Document, BuildError> {
    let meta = metadata::extract(lines);
    if meta.title.is_none() {
        return Err(BuildError::MissingTitle);
    }
    let raw_sections = sections::section(lines);
    let source = metadata::strip_metadata(lines).join("\n");
    assemble::assemble(meta, raw_sections, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end() {
        let input = "# DOC_TITLE: T\n\
                     # DOC_SUMMARY: S\n\
                     ### Step A\n\
                     x = 1  # set x\n\
                     ### Step B\n\
                     y = 2\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("T"));
        assert_eq!(doc.metadata.summary.as_deref(), Some("S"));
        assert_eq!(doc.steps.len(), 2);
        assert_eq!(doc.steps[0].index, 1);
        assert_eq!(doc.steps[0].heading, "Step A");
        assert_eq!(doc.steps[0].code_snippet, "x = 1");
        assert_eq!(doc.steps[1].index, 2);
        assert_eq!(doc.steps[1].heading, "Step B");
        assert_eq!(doc.steps[1].code_snippet, "y = 2");
        assert_eq!(doc.source, "### Step A\nx = 1  # set x\n### Step B\ny = 2");
    }

    #[test]
    fn missing_title_regardless_of_content() {
        let input = "# DOC_SUMMARY: S\n### A\nx = 1\n";
        assert_eq!(parse(input).unwrap_err(), BuildError::MissingTitle);
        assert_eq!(parse("").unwrap_err(), BuildError::MissingTitle);
    }

    #[test]
    fn title_after_code_is_not_seen() {
        let input = "x = 1\n# DOC_TITLE: Too late\n";
        assert_eq!(parse(input).unwrap_err(), BuildError::MissingTitle);
    }

    #[test]
    fn step_summary_binding() {
        let input = "# DOC_TITLE: T\n\
                     # DOC_STEP_SUMMARY: S\n\
                     ### Heading\n\
                     x = 1\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.steps.len(), 1);
        assert_eq!(doc.steps[0].heading, "Heading");
        assert_eq!(doc.steps[0].summary_text, "S");
    }

    #[test]
    fn step_summaries_above_and_under_headings() {
        let input = "# DOC_TITLE: T\n\
                     ### Load\n\
                     # DOC_STEP_SUMMARY: Reads the input.\n\
                     data = load()\n\
                     # DOC_STEP_SUMMARY: Cleans the rows.\n\
                     ### Clean\n\
                     rows = clean(data)\n\
                     ### Save\n\
                     save(rows)\n";
        let doc = parse(input).unwrap();
        let summaries: Vec<(&str, bool)> = doc
            .steps
            .iter()
            .map(|s| (s.summary_text.as_str(), s.summary_declared))
            .collect();
        assert_eq!(
            summaries,
            vec![
                ("Reads the input.", true),
                ("Cleans the rows.", true),
                ("This step saves.", false),
            ]
        );
    }

    #[test]
    fn leading_section_suppressed() {
        let input = "# DOC_TITLE: T\n# DOC_NOTE: n\n### First step\nrun()\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.steps[0].index, 1);
        assert_eq!(doc.steps[0].heading, "First step");
    }

    #[test]
    fn sample_with_prose_and_blank_lines() {
        let input = "\
# DOC_TITLE: Fibonacci Sequence Example
# DOC_SUMMARY: Computes the first N Fibonacci numbers.
# DOC_NOTES: This sample demonstrates a basic loop and list usage.

### Define Fibonacci Function
# Seed the list with the first two values,
# then extend it.
def fibonacci(n):
    seq = [0, 1]
    for i in range(2, n):
        seq.append(seq[-1] + seq[-2])  # next value
    return seq[:n]

### Print First 10 Fibonacci Numbers
print(fibonacci(10))
";
        let doc = parse(input).unwrap();
        assert_eq!(doc.metadata.notes.len(), 1);
        assert_eq!(doc.steps.len(), 2);

        let first = &doc.steps[0];
        assert_eq!(first.heading, "Define Fibonacci Function");
        assert_eq!(
            first.prose,
            vec!["Seed the list with the first two values,", "then extend it."]
        );
        assert_eq!(
            first.code_snippet,
            "def fibonacci(n):\n    seq = [0, 1]\n    for i in range(2, n):\n        seq.append(seq[-1] + seq[-2])\n    return seq[:n]"
        );
        assert_eq!(first.summary_text, "This step defines fibonacci function.");

        assert_eq!(doc.steps[1].code_snippet, "print(fibonacci(10))");
    }
}
