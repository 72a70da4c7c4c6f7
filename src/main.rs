//! Video Scoring
//!
//! With the `web` feature this is the browser client; with the default
//! `server` feature it is the native host that serves the built client.

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use std::net::SocketAddr;
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
use video_scoring::{api, config};

#[cfg(not(feature = "server"))]
fn main() {
    // dioxus::launch installs its own tracing logger in the browser
    dioxus::launch(video_scoring::app::App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "video_scoring=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Video Scoring host");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the client with `dx bundle --platform web` first",
            config.dist_dir.display()
        );
    }

    let app = api::router(&config.dist_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
