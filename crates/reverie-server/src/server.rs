//! Static preview server.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tower_http::services::ServeDir;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Directory of pre-rendered files to serve
    pub dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("_site"),
            port: 4000,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("Invalid address {0}: {1}")]
    InvalidAddr(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Static file server over the build output.
pub struct PreviewServer {
    config: PreviewConfig,
}

impl PreviewServer {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Serve until the process is stopped.
    pub async fn start(self) -> Result<(), ServeError> {
        if !self.config.dir.exists() {
            return Err(ServeError::MissingDir(self.config.dir));
        }

        let raw = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw
            .parse()
            .map_err(|e: std::net::AddrParseError| ServeError::InvalidAddr(raw, e.to_string()))?;

        let app = Router::new().fallback_service(ServeDir::new(&self.config.dir));

        tracing::info!("Serving {} at http://{}", self.config.dir.display(), addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServeError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let _ = open::that(format!("http://{}", addr));
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServeError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_output_dir() {
        let server = PreviewServer::new(PreviewConfig::default());

        assert_eq!(server.config.dir, PathBuf::from("_site"));
        assert_eq!(server.config.port, 4000);
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let server = PreviewServer::new(PreviewConfig {
            dir: PathBuf::from("/definitely/not/here"),
            open: false,
            ..Default::default()
        });

        assert!(matches!(
            server.start().await,
            Err(ServeError::MissingDir(_))
        ));
    }
}
