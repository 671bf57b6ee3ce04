//! Content collections.
//!
//! A collection is one section's Markdown files, newest first. Sorting is
//! stable, so items sharing a date keep their discovery order.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use reverie_content::{parse_document, Document, DocumentError};

/// The three content sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Posts,
    Projects,
    Gallery,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Posts, Section::Projects, Section::Gallery];

    /// Directory name under the content root, also the URL segment.
    pub fn dir_name(self) -> &'static str {
        match self {
            Section::Posts => "posts",
            Section::Projects => "projects",
            Section::Gallery => "gallery",
        }
    }

    /// Template used for this section's item pages.
    pub fn item_template(self) -> &'static str {
        match self {
            Section::Posts | Section::Projects => "post.html",
            Section::Gallery => "photo.html",
        }
    }

    /// Template used for this section's listing page.
    pub fn list_template(self) -> &'static str {
        match self {
            Section::Posts | Section::Projects => "list.html",
            Section::Gallery => "gallery.html",
        }
    }
}

/// One discovered content file.
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Source file path
    pub source_path: PathBuf,

    /// URL segment derived from the file stem
    pub slug: String,

    /// Parsed front-matter and body
    pub document: Document,
}

/// An ordered view over one section's content.
#[derive(Debug)]
pub struct Collection {
    pub section: Section,
    pub items: Vec<ContentItem>,
}

/// Errors that can occur while discovering content.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("{path}: {source}")]
    Content {
        path: String,
        source: DocumentError,
    },
}

impl Collection {
    /// Discover a section's Markdown files and sort them by date
    /// descending. A missing section directory yields an empty collection.
    pub fn discover(content_dir: &Path, section: Section) -> Result<Self, CollectionError> {
        let section_dir = content_dir.join(section.dir_name());
        let mut items = Vec::new();

        if !section_dir.exists() {
            return Ok(Self { section, items });
        }

        for entry in WalkDir::new(&section_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            if stem.to_ascii_uppercase().starts_with("README") {
                continue;
            }

            let source = fs::read_to_string(path).map_err(|e| CollectionError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let document = parse_document(&source).map_err(|e| CollectionError::Content {
                path: path.display().to_string(),
                source: e,
            })?;

            items.push(ContentItem {
                source_path: path.to_path_buf(),
                slug: stem.to_string(),
                document,
            });
        }

        // Stable sort: equal dates keep discovery order.
        items.sort_by(|a, b| b.document.frontmatter.date.cmp(&a.document.frontmatter.date));

        Ok(Self { section, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        fs::write(
            dir.join(name),
            format!("---\ntitle: {title}\ndate: {date}\n---\n\nBody.\n"),
        )
        .unwrap();
    }

    #[test]
    fn sorts_newest_first() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("posts");
        fs::create_dir_all(&posts).unwrap();

        write_post(&posts, "a.md", "Oldest", "2023-01-01");
        write_post(&posts, "b.md", "Newest", "2024-06-01");
        write_post(&posts, "c.md", "Middle", "2024-03-05");

        let collection = Collection::discover(temp.path(), Section::Posts).unwrap();

        let titles: Vec<&str> = collection
            .items
            .iter()
            .map(|i| i.document.frontmatter.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn equal_dates_keep_discovery_order() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("posts");
        fs::create_dir_all(&posts).unwrap();

        write_post(&posts, "a.md", "First", "2024-03-05");
        write_post(&posts, "b.md", "Second", "2024-03-05");
        write_post(&posts, "c.md", "Third", "2024-03-05");

        let collection = Collection::discover(temp.path(), Section::Posts).unwrap();

        let titles: Vec<&str> = collection
            .items
            .iter()
            .map(|i| i.document.frontmatter.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn skips_readme_and_non_markdown() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("posts");
        fs::create_dir_all(&posts).unwrap();

        write_post(&posts, "keep.md", "Keep", "2024-01-01");
        fs::write(posts.join("README.md"), "# not content").unwrap();
        fs::write(posts.join("notes.txt"), "not content").unwrap();

        let collection = Collection::discover(temp.path(), Section::Posts).unwrap();

        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.items[0].slug, "keep");
    }

    #[test]
    fn missing_section_directory_is_empty() {
        let temp = tempdir().unwrap();

        let collection = Collection::discover(temp.path(), Section::Gallery).unwrap();

        assert!(collection.items.is_empty());
    }

    #[test]
    fn missing_date_fails_discovery() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("bad.md"), "---\ntitle: Undated\n---\n\nBody.\n").unwrap();

        let result = Collection::discover(temp.path(), Section::Posts);

        assert!(matches!(result, Err(CollectionError::Content { .. })));
    }
}
