mod binder;
mod config;
mod errors;
mod loader;
mod models;
mod render;
mod reveal;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::{FileSource, HttpSource, Loader};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    let mode = std::env::args().nth(1).unwrap_or_else(|| "render".to_string());
    match mode.as_str() {
        "render" => run_render(config).await,
        "serve" => run_serve(config).await,
        other => anyhow::bail!("Unknown mode '{other}' (expected 'render' or 'serve')"),
    }
}

/// Fetch the document (primary API, then the bundled fallback), bind it, and
/// write the finished page.
async fn run_render(config: Config) -> Result<()> {
    let loader = Loader::new(
        Box::new(HttpSource::new(
            config.data_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )),
        Box::new(FileSource::new(config.data_file.clone())),
    );

    match loader.load().await {
        Ok(doc) => {
            let mut page = render::Page::default();
            binder::bind(&doc, &mut page.mounts());
            write_page(&config, &page.into_html()).await?;
            info!("Wrote {}", config.out_file.display());
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            let html = render::error_page(
                "Error loading data. Please check if the resume API is running or the JSON file exists.",
            );
            write_page(&config, &html).await?;
            Err(e.into())
        }
    }
}

async fn write_page(config: &Config, html: &str) -> Result<()> {
    if let Some(parent) = config.out_file.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&config.out_file, html).await?;
    Ok(())
}

/// Serve the resume API over the JSON file store.
async fn run_serve(config: Config) -> Result<()> {
    let state = AppState {
        store: ResumeStore::new(config.data_file.clone()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the page may be served from any origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
