//! Static site builder for the reverie blog.
//!
//! Discovers Markdown content, renders it through the embedded templates,
//! and writes a servable directory tree of HTML plus copied assets.

pub mod assets;
pub mod builder;
pub mod collections;
pub mod filters;
pub mod minify;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use collections::{Collection, ContentItem, Section};
