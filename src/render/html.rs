//! HTML renderer — standalone HTML page with semantic markup.

use super::{step_text, PageInfo, Renderer};
use crate::links;
use crate::model::*;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document, page: &PageInfo) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(doc.title())));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str(".summary { font-style: italic; }\n");
        out.push_str("footer { color: #666; font-size: 0.85em; margin-top: 2em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!(
            "<!-- AUTO-GENERATED doc for {} -->\n",
            html_escape(&page.source)
        ));

        out.push_str(&format!("<h1>{}</h1>\n", html_escape(doc.title())));
        if let Some(ref summary) = doc.metadata.summary {
            out.push_str(&format!("<p class=\"summary\">{}</p>\n", html_escape(summary)));
        }

        if !doc.metadata.notes.is_empty() {
            out.push_str("<ul class=\"notes\">\n");
            for note in &doc.metadata.notes {
                out.push_str(&format!("  <li>{}</li>\n", html_escape(note)));
            }
            out.push_str("</ul>\n");
        }

        if !doc.steps.is_empty() {
            out.push_str("<h2>Step-by-step walk-through</h2>\n");
            for step in &doc.steps {
                out.push_str(&render_step_html(step, &page.code_language));
            }
        }

        if !doc.resources.is_empty() {
            out.push_str("<h2>Resources</h2>\n<ul>\n");
            for link in &doc.resources {
                out.push_str(&render_link_html(link));
            }
            out.push_str("</ul>\n");
        }

        out.push_str("<details><summary>Full source</summary>\n");
        out.push_str(&format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            html_escape(&page.code_language),
            html_escape(&doc.source)
        ));
        out.push_str("</details>\n");
        out.push_str(&format!(
            "<footer>Last updated: {}</footer>\n",
            page.generated.format("%Y-%m-%d")
        ));

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_step_html(step: &Step, language: &str) -> String {
    let mut out = String::new();
    let title = format!("Step {}: {}", step.index, step.heading);

    out.push_str(&format!(
        "<h3 id=\"{}\">{}</h3>\n",
        html_escape(&links::github_slug(&title)),
        html_escape(&title)
    ));

    for block in step_text(step) {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&block).replace('\n', "<br>\n")));
    }

    if !step.code_snippet.is_empty() {
        out.push_str(&format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            html_escape(language),
            html_escape(&step.code_snippet)
        ));
    }

    out
}

fn render_link_html(link: &ResourceLink) -> String {
    match &link.url {
        Some(url) => format!(
            "  <li><a href=\"{}\">{}</a></li>\n",
            html_escape(url),
            html_escape(&link.text)
        ),
        None => format!("  <li>{}</li>\n", html_escape(&link.raw)),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn render(input: &str) -> String {
        let doc = parser::parse(input).unwrap();
        HtmlRenderer.render(&doc, &PageInfo::new("sample.py", "python"))
    }

    #[test]
    fn page_structure() {
        let out = render("# DOC_TITLE: A & B\n### Compare\nprint(1 < 2)\n");
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>A &amp; B</title>"));
        assert!(out.contains("<h3 id=\"step-1-compare\">Step 1: Compare</h3>"));
        assert!(out.contains("print(1 &lt; 2)"));
        assert!(out.ends_with("</html>\n"));
    }

    #[test]
    fn malformed_link_is_plain_text() {
        let out = render("# DOC_TITLE: T\n# DOC_LINKS: somewhere\n# DOC_LINKS: https://x.example\nx = 1\n");
        assert!(out.contains("<li>somewhere</li>"));
        assert!(out.contains("<a href=\"https://x.example\">https://x.example</a>"));
    }

    #[test]
    fn escape() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
