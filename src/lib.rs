//! autodocs — turn annotated source files into step-by-step documentation.
//!
//! Sources carry `# DOC_*` tags for page metadata and `### Heading` lines
//! that split the code into steps. [`parser::parse`] builds the
//! format-agnostic [`model::Document`]; [`render`] turns it into pages and
//! [`batch`] drives many files at once.

pub mod assemble;
pub mod batch;
pub mod config;
pub mod error;
pub mod linkcheck;
pub mod links;
pub mod model;
pub mod parser;
pub mod render;
pub mod summary;

pub use error::{BuildError, DocError};
pub use model::Document;
pub use parser::parse;
