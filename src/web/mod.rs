//! Web layer module
//!
//! Thin axum handlers over the channel store, the playlist parser and
//! generator, and the placeholder guide. Handlers hold no logic of their own
//! beyond request shaping and error mapping.

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::{config::Config, services::ChannelStore};

pub mod handlers;
pub mod responses;

pub use responses::{handle_error, ErrorResponse, UploadResponse};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub channels: ChannelStore,
}

impl AppState {
    pub fn new(config: Config, channels: ChannelStore) -> Self {
        Self {
            config: Arc::new(config),
            channels,
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, channels: ChannelStore) -> Result<Self> {
        let addr: SocketAddr = config.bind_address().parse()?;
        let app = create_router(AppState::new(config, channels));

        Ok(Self { app, addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let index_file = state.config.storage.index_file.clone();
    let static_path = state.config.storage.static_path.clone();
    let max_upload_bytes = state.config.web.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes())
        .route_service("/", ServeFile::new(index_file))
        .nest_service("/static", ServeDir::new(static_path))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/channels", get(handlers::channels::list_channels))
        .route("/channels/{channel_name}", get(handlers::channels::get_channel))
        .route("/categories", get(handlers::channels::list_categories))
        .route("/epg", get(handlers::epg::get_epg))
        .route("/epg/{channel_id}", get(handlers::epg::get_channel_epg))
        .route("/playlist", get(handlers::playlist::get_playlist))
        .route("/upload_playlist", post(handlers::playlist::upload_playlist))
}
