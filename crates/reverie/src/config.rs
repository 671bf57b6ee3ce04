//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use reverie_static::BuildConfig;
use reverie_ui::VisitorStats;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub stats: VisitorStats,
}

#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentSettings {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    #[serde(default = "default_output")]
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default)]
    pub remove_comments: bool,
}

fn default_title() -> String {
    "Reverie".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_content_dir() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "_site".to_string()
}
fn default_minify() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            output: default_output(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
            remove_comments: false,
        }
    }
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Turn file settings into a build configuration, with optional
    /// command-line overrides.
    pub fn build_config(&self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            site_dir: PathBuf::from("."),
            content_dir: PathBuf::from(&self.content.dir),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.content.output)),
            base_url: self.site.base_url.clone(),
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            minify: minify.unwrap_or(self.build.minify),
            remove_comments: self.build.remove_comments,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: ConfigFile = toml::from_str(
            r#"
[site]
title = "Dream Journal"
description = "A quiet corner of the web"
base_url = "/"

[content]
dir = "content"
output = "_site"

[build]
minify = false

[stats]
start_date = "2024-01-01"
thoughts = 25
moments = 48
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Dream Journal");
        assert!(!config.build.minify);
        assert_eq!(config.stats.thoughts, 25);
        assert_eq!(config.stats.moments, 48);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        let build = config.build_config(None, None);

        assert_eq!(build.output_dir, PathBuf::from("_site"));
        assert!(build.minify);
        assert_eq!(build.base_url, "/");
    }

    #[test]
    fn cli_overrides_win() {
        let config: ConfigFile = toml::from_str("[build]\nminify = true\n").unwrap();

        let build = config.build_config(Some(PathBuf::from("public")), Some(false));

        assert_eq!(build.output_dir, PathBuf::from("public"));
        assert!(!build.minify);
    }
}
