//! Parsed content documents.

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
use crate::markdown::render_markdown;

/// A content file split into front-matter and Markdown body.
#[derive(Debug, Clone)]
pub struct Document {
    /// Parsed front-matter
    pub frontmatter: Frontmatter,

    /// Markdown body (without front-matter)
    pub body: String,
}

impl Document {
    /// Render the Markdown body to HTML.
    pub fn render(&self) -> String {
        render_markdown(&self.body)
    }
}

/// Errors that can occur when parsing a content file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Collection items need a date to sort by, so front-matter is required.
    #[error("Content file has no front-matter block")]
    MissingFrontmatter,

    #[error("Front-matter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a content file.
///
/// Front-matter is mandatory for collection content; a bare Markdown file
/// is an error rather than an undated item.
pub fn parse_document(source: &str) -> Result<Document, DocumentError> {
    let (frontmatter, body) = extract_frontmatter(source)?;
    let frontmatter = frontmatter.ok_or(DocumentError::MissingFrontmatter)?;

    Ok(Document {
        frontmatter,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_complete_document() {
        let source = r#"---
title: Night Walk
date: 2024-05-12
---

# Night Walk

The streets were empty.
"#;

        let doc = parse_document(source).unwrap();

        assert_eq!(doc.frontmatter.title, "Night Walk");
        assert_eq!(
            doc.frontmatter.date,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
        assert!(doc.body.starts_with("# Night Walk"));

        let html = doc.render();
        assert!(html.contains("<h1 id=\"night-walk\">"));
        assert!(html.contains("The streets were empty."));
    }

    #[test]
    fn rejects_bare_markdown() {
        let result = parse_document("# No Front-matter\n\nBody.");

        assert!(matches!(result, Err(DocumentError::MissingFrontmatter)));
    }
}
