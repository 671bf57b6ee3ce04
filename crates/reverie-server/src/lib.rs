//! Preview server and rebuild watcher.
//!
//! Serves the pre-rendered output tree over HTTP and watches source
//! directories so the CLI can rebuild on change. There is no runtime
//! beyond static file serving.

pub mod server;
pub mod watcher;

pub use server::{PreviewConfig, PreviewServer, ServeError};
pub use watcher::{FileWatcher, WatchEvent};
