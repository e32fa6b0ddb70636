//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model together with the page context.

use super::{PageInfo, Renderer};
use crate::model::Document;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonPage<'a> {
    path: &'a str,
    generated: String,
    #[serde(flatten)]
    document: &'a Document,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document, page: &PageInfo) -> String {
        let json = JsonPage {
            path: &page.source,
            generated: page.generated.format("%Y-%m-%d").to_string(),
            document: doc,
        };
        // The model holds only strings, integers and booleans.
        let mut out = serde_json::to_string_pretty(&json).unwrap_or_default();
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
