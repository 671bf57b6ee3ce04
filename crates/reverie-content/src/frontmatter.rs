//! Front-matter extraction and parsing.

use chrono::NaiveDate;
use serde::Deserialize;

/// Parsed front-matter from a content file.
///
/// `title` and `date` are required; collections cannot be ordered without a
/// date, so a missing one is rejected at parse time rather than surfacing
/// later as an unorderable comparison.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title (required)
    pub title: String,

    /// Publication date (required)
    pub date: NaiveDate,

    /// Page description for listings and SEO
    #[serde(default)]
    pub description: Option<String>,

    /// Tags shown on listing pages
    #[serde(default)]
    pub tags: Vec<String>,

    /// Cover image path, relative to the section's images directory
    #[serde(default)]
    pub cover: Option<String>,

    /// Layout override (defaults to the section's layout)
    #[serde(default)]
    pub layout: Option<String>,
}

/// Extract front-matter from a content file.
///
/// Returns the parsed front-matter and the remaining Markdown after the
/// closing `---`. Files without an opening `---` have no front-matter.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = &after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing front-matter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed front-matter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in front-matter: {0}")]
    InvalidYaml(String),
}
