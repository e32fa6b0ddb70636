//! Split a raw section body into leading prose and code.

use super::classify::{self, LineKind};
use super::quote::QuoteTracker;
use crate::model::RefinedSection;

/// Where the scan is within a section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Leading comment block; comments and blanks become prose.
    Prose,
    /// Everything from the first code line on, verbatim.
    Code,
}

/// Refine one section body.
///
/// The first code line ends the prose block for good; comments after it
/// belong to the code. Trailing blank prose lines are dropped and inline
/// comments are removed from code lines.
pub fn refine<S: AsRef<str>>(body: &[S]) -> RefinedSection {
    let mut mode = Mode::Prose;
    let mut refined = RefinedSection::default();

    for line in body {
        let line = line.as_ref();
        if mode == Mode::Prose {
            match classify::classify(line) {
                LineKind::Comment => {
                    refined.prose.push(classify::strip_comment_markers(line));
                    continue;
                }
                LineKind::Blank => {
                    refined.prose.push(String::new());
                    continue;
                }
                // tag lines are removed by the sectioner
                LineKind::Tag(_) => continue,
                LineKind::Heading(_) | LineKind::Code => mode = Mode::Code,
            }
        }
        refined
            .code
            .push(QuoteTracker::strip_inline_comment(line).to_string());
    }

    while refined.prose.last().is_some_and(|l| l.trim().is_empty()) {
        refined.prose.pop();
    }

    refined
}
