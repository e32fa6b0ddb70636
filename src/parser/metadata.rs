//! File-level metadata from the leading comment block.

use super::classify::{self, LineKind};
use super::tags::{self, Tag};
use crate::model::DocumentMetadata;

/// Collect DOC_* tags until the first code line.
///
/// Title and summary keep their first occurrence; notes and links
/// accumulate. Step summaries, headings, plain comments and blank lines
/// are passed over without ending the scan.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> DocumentMetadata {
    let mut meta = DocumentMetadata::default();

    for line in lines {
        match classify::classify(line.as_ref()) {
            LineKind::Tag(t) => {
                let payload = t.payload.to_string();
                match t.tag {
                    Tag::Title => {
                        meta.title.get_or_insert(payload);
                    }
                    Tag::Summary => {
                        meta.summary.get_or_insert(payload);
                    }
                    Tag::Note => meta.notes.push(payload),
                    Tag::Link => meta.links.push(payload),
                    Tag::StepSummary => {}
                }
            }
            LineKind::Code => break,
            LineKind::Heading(_) | LineKind::Blank | LineKind::Comment => {}
        }
    }

    meta
}

/// The source with every tag line removed, for the full-source listing.
pub fn strip_metadata<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !tags::is_tag_line(line))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collects_all_kinds() {
        let lines = [
            "# DOC_TITLE: Fib",
            "# DOC_BLURB: Computes numbers",
            "# DOC_NOTES: first",
            "# DOC_LINK: https://a.example",
            "# DOC_NOTE: second",
            "# DOC_LINKS: https://b.example",
            "def f(): pass",
        ];
        let meta = extract(&lines);
        assert_eq!(meta.title.as_deref(), Some("Fib"));
        assert_eq!(meta.summary.as_deref(), Some("Computes numbers"));
        assert_eq!(meta.notes, vec!["first", "second"]);
        assert_eq!(meta.links, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn first_title_and_summary_win() {
        let lines = [
            "# DOC_TITLE: One",
            "# DOC_TITLE: Two",
            "# DOC_SUMMARY: A",
            "# DOC_BLURB: B",
        ];
        let meta = extract(&lines);
        assert_eq!(meta.title.as_deref(), Some("One"));
        assert_eq!(meta.summary.as_deref(), Some("A"));
    }

    #[test]
    fn stops_at_first_code_line() {
        let lines = ["# DOC_TITLE: T", "x = 1", "# DOC_NOTE: too late"];
        let meta = extract(&lines);
        assert_eq!(meta.title.as_deref(), Some("T"));
        assert!(meta.notes.is_empty());
    }

    #[test]
    fn comments_headings_and_step_summaries_do_not_stop() {
        let lines = [
            "# intro comment",
            "",
            "# DOC_STEP_SUMMARY: ignored here",
            "### First",
            "# DOC_TITLE: Late but before code",
            "y = 2",
        ];
        let meta = extract(&lines);
        assert_eq!(meta.title.as_deref(), Some("Late but before code"));
    }

    #[test]
    fn no_title() {
        let meta = extract(&["# DOC_SUMMARY: S", "x = 1"]);
        assert!(meta.title.is_none());
        assert_eq!(meta.summary.as_deref(), Some("S"));
    }

    #[test]
    fn strip_removes_every_tag_kind() {
        let lines = [
            "# DOC_TITLE: T",
            "# DOC_STEP_SUMMARY: s",
            "### A",
            "x = 1",
            "# DOC_NOTE: after code",
        ];
        assert_eq!(strip_metadata(&lines), vec!["### A", "x = 1"]);
    }

    fn line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("# DOC_TITLE: T".to_string()),
            Just("# doc_blurb: b".to_string()),
            Just("# DOC_NOTES: n".to_string()),
            Just("# DOC_STEP_SUMMARY: s".to_string()),
            Just("### Heading".to_string()),
            Just(String::new()),
            "[#a-z =\"']{0,16}",
        ]
    }

    proptest! {
        #[test]
        fn stripping_is_idempotent(lines in prop::collection::vec(line(), 0..32)) {
            let once = strip_metadata(&lines);
            prop_assert!(once.iter().all(|l| !tags::is_tag_line(l)));
            let meta = extract(&once);
            prop_assert!(meta.title.is_none());
            prop_assert!(meta.summary.is_none());
            prop_assert!(meta.notes.is_empty());
            prop_assert!(meta.links.is_empty());
            prop_assert_eq!(strip_metadata(&once), once);
        }
    }
}
