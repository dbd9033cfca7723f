mod config;
mod db;
mod errors;
mod leads;
mod media;
mod models;
mod repository;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::media::MediaStore;
use crate::repository::postgres::{PgLeadRepository, PgResumeRepository};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging. The directive uses the crate name
    // (underscored), not the package name: tracing targets are module paths,
    // and `intake-api=info` would match none of them.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the tables exist
    let db = create_pool(&config.database_url).await?;
    db::ensure_schema(&db).await?;

    // Uploaded files land under the media root; only paths are stored in DB
    let media = MediaStore::new(&config.media_root);
    info!("Media root: {}", config.media_root);

    // Build app state
    let state = AppState {
        resumes: Arc::new(PgResumeRepository::new(db.clone())),
        leads: Arc::new(PgLeadRepository::new(db)),
        media,
    };

    // Build router. CORS stays permissive: the lead webhook is called
    // cross-origin by the external CRM tool.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
