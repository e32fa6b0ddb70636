//! GitHub-flavored markdown page.

use super::{step_text, PageInfo, Renderer};
use crate::links;
use crate::model::*;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document, page: &PageInfo) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("<!-- AUTO-GENERATED doc for {} -->", page.source));
        lines.push(format!("# {}\n", doc.title()));

        if let Some(ref summary) = doc.metadata.summary {
            lines.push(format!("_{}_\n", summary));
        }

        if !doc.metadata.notes.is_empty() {
            for note in &doc.metadata.notes {
                lines.push(format!("- {}", note));
            }
            lines.push(String::new());
        }

        if !doc.steps.is_empty() {
            lines.push("## Step-by-step walk-through\n".to_string());
            for step in &doc.steps {
                render_step(&mut lines, step, &page.code_language);
            }
        }

        if !doc.resources.is_empty() {
            lines.push("## Resources\n".to_string());
            for link in &doc.resources {
                lines.push(links::render_link_item(link));
            }
            lines.push(String::new());
        }

        lines.push("<details><summary>Full source</summary>\n".to_string());
        lines.push(format!("```{}", page.code_language));
        lines.push(doc.source.clone());
        lines.push("```".to_string());
        lines.push("</details>\n".to_string());
        lines.push(format!("Last updated: {}", page.generated.format("%Y-%m-%d")));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_step(lines: &mut Vec<String>, step: &Step, language: &str) {
    lines.push(format!("### Step {}: {}\n", step.index, step.heading));

    for block in step_text(step) {
        lines.push(block);
        lines.push(String::new());
    }

    if !step.code_snippet.is_empty() {
        lines.push(format!("```{}", language));
        lines.push(step.code_snippet.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }
}
