use crate::catalog::Catalog;
use crate::metadata::{MetadataProvider, TmdbProvider};
use crate::webdav::{DirectoryLister, WebdavLister};
use anyhow::{Context, Result};
use axum::{response::IntoResponse, routing::get, Json, Router};
use davshelf_core::{Config, Player, PlayerRegistry};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub mod page;
pub mod routes_library;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub catalog: Catalog,
}

impl AppContext {
    /// Build the live context: WebDAV lister and TMDB provider from `config`.
    pub fn new(config: Config) -> Self {
        let lister: Arc<dyn DirectoryLister> = Arc::new(WebdavLister::new(config.webdav.clone()));
        let provider: Arc<dyn MetadataProvider> = Arc::new(TmdbProvider::new(config.tmdb.clone()));
        Self::with_parts(config, lister, provider)
    }

    /// Build a context around explicit collaborators.
    pub fn with_parts(
        config: Config,
        lister: Arc<dyn DirectoryLister>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        let catalog = Catalog::new(config.webdav.clone(), lister, provider);
        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    /// Resolve a user-supplied player selection, falling back to the
    /// configured default and then to `vlc`.
    ///
    /// An unknown `?player=` therefore resolves to `server.default_player`
    /// rather than always to `vlc`; the two only differ when the config
    /// names another known player.
    pub fn resolve_player(&self, requested: Option<&str>) -> &'static Player {
        PlayerRegistry::standard().resolve_or(requested, &self.config.server.default_player)
    }
}

/// Create the Axum router with all routes.
///
/// Responses carry no CORS headers: play links embed the share credentials
/// and must not be readable cross-origin.
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes_library::library_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    if config.webdav.is_live() {
        tracing::info!("Listing WebDAV share at {}", config.webdav.endpoint().unwrap_or_default());
    } else {
        tracing::info!(
            "WebDAV not configured; serving fixture data from {}",
            config.webdav.fixture_path.display()
        );
    }
    if config.tmdb.api_key().is_none() {
        tracing::info!("TMDB API key not configured; metadata lookups disabled");
    }

    let app = create_router(AppContext::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
