//! Partition a source into raw sections at `###` headings.
//!
//! Single pass over the lines with three pieces of state: the open
//! heading, the pending step summary and the body accumulator. Tag lines
//! never enter a body.
//!
//! A DOC_STEP_SUMMARY written directly under a heading, before any body
//! text, describes that heading's section. Anywhere else it becomes the
//! pending summary, overwriting any earlier one, and is handed to the
//! section opened by the next heading.

use super::classify::{self, LineKind};
use super::tags::Tag;
use crate::model::{RawSection, SectionHeading};

#[derive(Debug)]
struct Sectioner {
    done: Vec<RawSection>,
    heading: SectionHeading,
    /// Summary of the section currently being filled.
    step_summary: Option<String>,
    /// Most recent summary seen since the last heading.
    pending_summary: Option<String>,
    body: Vec<String>,
}

impl Sectioner {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            heading: SectionHeading::Prelude,
            step_summary: None,
            pending_summary: None,
            body: Vec::new(),
        }
    }

    fn step(&mut self, line: &str) {
        match classify::classify(line) {
            LineKind::Tag(t) => {
                if t.tag == Tag::StepSummary {
                    let summary = t.payload.to_string();
                    if self.accepts_own_summary() {
                        self.step_summary = Some(summary);
                    } else {
                        self.pending_summary = Some(summary);
                    }
                }
            }
            LineKind::Heading(text) => {
                self.close();
                self.heading = SectionHeading::Named(text.to_string());
                self.step_summary = self.pending_summary.take();
            }
            LineKind::Blank | LineKind::Comment | LineKind::Code => {
                self.body.push(line.to_string());
            }
        }
    }

    /// A named section with no summary and nothing but blank lines so far.
    fn accepts_own_summary(&self) -> bool {
        !self.heading.is_prelude()
            && self.step_summary.is_none()
            && self.body.iter().all(|l| classify::is_blank(l))
    }

    /// Emit the open section and start an empty one.
    fn close(&mut self) {
        self.done.push(RawSection {
            heading: std::mem::replace(&mut self.heading, SectionHeading::Prelude),
            step_summary: self.step_summary.take(),
            body: std::mem::take(&mut self.body),
        });
    }

    fn finish(mut self) -> Vec<RawSection> {
        // A summary after the last heading with nothing to bind to is
        // attached to that last section.
        if self.step_summary.is_none() {
            self.step_summary = self.pending_summary.take();
        }
        self.close();
        self.done
    }
}

/// Split lines into raw sections; always returns `headings + 1` sections.
pub fn section<S: AsRef<str>>(lines: &[S]) -> Vec<RawSection> {
    let mut sectioner = Sectioner::new();
    for line in lines {
        sectioner.step(line.as_ref());
    }
    sectioner.finish()
}
