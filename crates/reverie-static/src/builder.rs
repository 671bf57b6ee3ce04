//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use reverie_ui::VisitorStats;

use crate::assets;
use crate::collections::{Collection, CollectionError, ContentItem, Section};
use crate::minify::{self, HtmlMinifyOptions};
use crate::templates::{ItemSummary, PageContext, SiteContext, StatsContext, TemplateEngine};

/// Number of recent posts shown on the home page.
const RECENT_POSTS: usize = 5;

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Site root (holds `assets/`)
    pub site_dir: PathBuf,

    /// Content root (holds `posts/`, `projects/`, `gallery/`)
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for deployment under a path prefix
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Run the gentle HTML minification transform on `.html` outputs
    pub minify: bool,

    /// Strip HTML comments while minifying
    pub remove_comments: bool,

    /// Figures for the home page counters
    pub stats: VisitorStats,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("_site"),
            base_url: "/".to_string(),
            title: "Reverie".to_string(),
            description: String::new(),
            minify: true,
            remove_comments: false,
            stats: VisitorStats::default(),
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages written
    pub pages: usize,

    /// Number of passthrough assets copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read content: {0}")]
    ReadError(String),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the whole site: collections, pages, passthrough assets.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let collections: Vec<Collection> = Section::ALL
            .iter()
            .map(|s| Collection::discover(&self.config.content_dir, *s))
            .collect::<Result<_, _>>()?;

        let mut pages = 0;

        // Home and listing pages.
        self.build_home(&collections)?;
        pages += 1;
        for collection in &collections {
            self.build_list(collection)?;
            pages += 1;
        }

        // Item pages in parallel.
        let items: Vec<(Section, &ContentItem)> = collections
            .iter()
            .flat_map(|c| c.items.iter().map(|i| (c.section, i)))
            .collect();

        let results: Vec<Result<(), BuildError>> = items
            .par_iter()
            .map(|(section, item)| self.build_item(*section, item))
            .collect();

        for result in results {
            result?;
        }
        pages += items.len();

        let copied = assets::passthrough(
            &self.config.site_dir,
            &self.config.content_dir,
            &self.config.output_dir,
        )?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            assets: copied,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn site_context(&self) -> SiteContext {
        SiteContext {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            base_url: self.config.base_url.clone(),
        }
    }

    fn item_summary(&self, section: Section, item: &ContentItem) -> ItemSummary {
        let fm = &item.document.frontmatter;
        ItemSummary {
            title: fm.title.clone(),
            date: fm.date.to_string(),
            description: fm.description.clone(),
            url: format!(
                "{}{}/{}/",
                self.config.base_url,
                section.dir_name(),
                item.slug
            ),
            tags: fm.tags.clone(),
            cover: fm.cover.as_ref().map(|c| {
                format!("{}{}/images/{}", self.config.base_url, section.dir_name(), c)
            }),
        }
    }

    /// Render the home page: hero, counter stats, recent posts.
    fn build_home(&self, collections: &[Collection]) -> Result<(), BuildError> {
        let posts = collections
            .iter()
            .find(|c| c.section == Section::Posts)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[]);

        let today = chrono::Local::now().date_naive();
        let stats = StatsContext {
            days_running: self.config.stats.days_running(today),
            thoughts: self.config.stats.thoughts,
            moments: self.config.stats.moments,
        };

        let page = PageContext {
            site: self.site_context(),
            title: "Home".to_string(),
            content: String::new(),
            date: None,
            cover: None,
            items: posts
                .iter()
                .take(RECENT_POSTS)
                .map(|i| self.item_summary(Section::Posts, i))
                .collect(),
            stats: Some(stats),
        };

        let html = self
            .templates
            .render_page("home.html", &page)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        self.write_page(&self.config.output_dir.join("index.html"), html)
    }

    /// Render one section's listing page.
    fn build_list(&self, collection: &Collection) -> Result<(), BuildError> {
        let section = collection.section;

        let title = match section {
            Section::Posts => "Thoughts",
            Section::Projects => "Projects",
            Section::Gallery => "Moments",
        };

        let page = PageContext {
            site: self.site_context(),
            title: title.to_string(),
            content: String::new(),
            date: None,
            cover: None,
            items: collection
                .items
                .iter()
                .map(|i| self.item_summary(section, i))
                .collect(),
            stats: None,
        };

        let html = self
            .templates
            .render_page(section.list_template(), &page)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        self.write_page(
            &self
                .config
                .output_dir
                .join(section.dir_name())
                .join("index.html"),
            html,
        )
    }

    /// Render one content item's page.
    fn build_item(&self, section: Section, item: &ContentItem) -> Result<(), BuildError> {
        let summary = self.item_summary(section, item);

        let page = PageContext {
            site: self.site_context(),
            title: summary.title.clone(),
            content: item.document.render(),
            date: Some(summary.date.clone()),
            cover: summary.cover.clone(),
            items: vec![],
            stats: None,
        };

        let html = self
            .templates
            .render_page(section.item_template(), &page)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        self.write_page(
            &self
                .config
                .output_dir
                .join(section.dir_name())
                .join(&item.slug)
                .join("index.html"),
            html,
        )
    }

    /// Run the post-render transform and write one output file.
    fn write_page(&self, path: &Path, html: String) -> Result<(), BuildError> {
        let html = if self.config.minify {
            minify::transform(
                html,
                path,
                HtmlMinifyOptions {
                    remove_comments: self.config.remove_comments,
                },
            )
        } else {
            html
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(path, html).map_err(|e| BuildError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        fs::write(
            dir.join(name),
            format!("---\ntitle: {title}\ndate: {date}\n---\n\n# {title}\n\nBody text.\n"),
        )
        .unwrap();
    }

    fn config(root: &Path) -> BuildConfig {
        BuildConfig {
            site_dir: root.to_path_buf(),
            content_dir: root.join("content"),
            output_dir: root.join("_site"),
            stats: VisitorStats {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                thoughts: 25,
                moments: 48,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_a_simple_site() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("content/posts");
        fs::create_dir_all(&posts).unwrap();
        write_post(&posts, "hello.md", "Hello", "2024-03-05");

        let builder = StaticBuilder::new(config(temp.path()));
        let result = builder.build().await.unwrap();

        // Home + three listings + one item.
        assert_eq!(result.pages, 5);
        let out = temp.path().join("_site");
        assert!(out.join("index.html").exists());
        assert!(out.join("posts/index.html").exists());
        assert!(out.join("posts/hello/index.html").exists());

        let item = fs::read_to_string(out.join("posts/hello/index.html")).unwrap();
        assert!(item.contains("article-content"));
        assert!(item.contains("Body text."));
    }

    #[tokio::test]
    async fn home_page_carries_stats_and_recent_posts() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("content/posts");
        fs::create_dir_all(&posts).unwrap();
        write_post(&posts, "old.md", "Older", "2023-01-01");
        write_post(&posts, "new.md", "Newer", "2024-06-01");

        let builder = StaticBuilder::new(config(temp.path()));
        builder.build().await.unwrap();

        let home = fs::read_to_string(temp.path().join("_site/index.html")).unwrap();

        assert!(home.contains("id=\"thoughtsCount\" data-target=\"25\""));
        assert!(home.contains("id=\"momentsCount\" data-target=\"48\""));
        // Newest first on the home page too.
        let newer = home.find("Newer").unwrap();
        let older = home.find("Older").unwrap();
        assert!(newer < older);
    }

    #[tokio::test]
    async fn listing_pages_are_sorted_descending() {
        let temp = tempdir().unwrap();
        let gallery = temp.path().join("content/gallery");
        fs::create_dir_all(&gallery).unwrap();
        write_post(&gallery, "a.md", "Spring", "2024-04-01");
        write_post(&gallery, "b.md", "Winter", "2024-01-15");
        write_post(&gallery, "c.md", "Summer", "2024-07-20");

        let builder = StaticBuilder::new(config(temp.path()));
        builder.build().await.unwrap();

        let listing = fs::read_to_string(temp.path().join("_site/gallery/index.html")).unwrap();

        let summer = listing.find("Summer").unwrap();
        let spring = listing.find("Spring").unwrap();
        let winter = listing.find("Winter").unwrap();
        assert!(summer < spring && spring < winter);
        assert!(listing.contains("gallery-section"));
    }

    #[tokio::test]
    async fn copies_passthrough_assets() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("content/posts/images")).unwrap();
        fs::create_dir_all(temp.path().join("assets/js")).unwrap();
        write_post(
            &temp.path().join("content/posts"),
            "p.md",
            "Post",
            "2024-02-02",
        );
        fs::write(temp.path().join("assets/js/main.js"), "// main").unwrap();
        fs::write(temp.path().join("content/posts/images/a.png"), [1u8]).unwrap();

        let builder = StaticBuilder::new(config(temp.path()));
        let result = builder.build().await.unwrap();

        assert_eq!(result.assets, 2);
        assert!(temp.path().join("_site/assets/js/main.js").exists());
        assert!(temp.path().join("_site/posts/images/a.png").exists());
    }

    #[tokio::test]
    async fn undated_content_fails_the_build() {
        let temp = tempdir().unwrap();
        let posts = temp.path().join("content/posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("bad.md"), "---\ntitle: Undated\n---\nBody.\n").unwrap();

        let builder = StaticBuilder::new(config(temp.path()));

        assert!(matches!(
            builder.build().await,
            Err(BuildError::Collection(_))
        ));
    }
}
