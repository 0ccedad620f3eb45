use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffetta_server::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG se impostata, altrimenti info
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("load config from env")?;
    tracing::info!(media_dir = %config.media_dir.display(), max_upload_bytes = config.max_upload_bytes, "configuration loaded");

    tokio::fs::create_dir_all(&config.media_dir)
        .await
        .with_context(|| format!("create media dir {:?}", config.media_dir))?;

    let addr = config.bind_addr;
    // Stato condiviso: registri e log vivono per tutta la durata del processo
    let state = Arc::new(AppState::new(config));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
