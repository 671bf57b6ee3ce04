//! Markdown content pipeline.
//!
//! This crate parses content files (YAML front-matter plus Markdown body)
//! and renders the body to HTML with permalink anchors on every heading.

pub mod document;
pub mod frontmatter;
pub mod markdown;

pub use document::{parse_document, Document, DocumentError};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use markdown::{render_markdown, slugify};
