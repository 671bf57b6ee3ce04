//! Rebuild-on-change command.
//!
//! Builds once, then watches the content and asset directories and re-runs
//! the build on every change while the preview server serves the output.

use std::path::Path;

use anyhow::Result;
use reverie_server::{FileWatcher, PreviewConfig, PreviewServer};
use reverie_static::StaticBuilder;

use crate::config::load_config;

/// Run the dev command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let build_config = file_config.build_config(None, None);

    let result = StaticBuilder::new(build_config.clone()).build().await?;
    tracing::info!("Built {} pages", result.pages);

    let watch_paths = vec![
        build_config.content_dir.clone(),
        build_config.site_dir.join("assets"),
    ];
    let (watcher, mut rx) = FileWatcher::new(&watch_paths)?;

    let rebuild_config = build_config.clone();
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            tracing::info!("Change detected: {:?}", event);
            match StaticBuilder::new(rebuild_config.clone()).build().await {
                Ok(result) => tracing::info!("Rebuilt {} pages", result.pages),
                Err(e) => tracing::error!("Rebuild failed: {}", e),
            }
        }
        // Keep watcher alive for the lifetime of the loop.
        drop(watcher);
    });

    PreviewServer::new(PreviewConfig {
        dir: build_config.output_dir.clone(),
        port,
        open,
        ..Default::default()
    })
    .start()
    .await?;

    Ok(())
}
