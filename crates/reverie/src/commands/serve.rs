//! Preview server command.

use std::path::Path;

use anyhow::Result;
use reverie_server::{PreviewConfig, PreviewServer};

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let dir = file_config.build_config(None, None).output_dir;

    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'reverie build' first.",
            dir.display()
        );
    }

    PreviewServer::new(PreviewConfig {
        dir,
        port,
        open,
        ..Default::default()
    })
    .start()
    .await?;

    Ok(())
}
