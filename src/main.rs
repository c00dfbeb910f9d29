//! treeserve - serve a git tree over HTTP
//!
//! Renders the snapshot a reference points at: directories as link listings,
//! markdown files as HTML pages, everything else as raw bytes.
//!
//! # Usage
//! ```bash
//! treeserve --repo ./.git                      # serve HEAD on 127.0.0.1:8080
//! treeserve --repo /srv/docs.git --ref refs/heads/main --bind 0.0.0.0:8080
//! ```

mod classify;
mod error;
mod markup;
mod render;
mod resolve;
mod routes;
mod store;

use std::sync::Arc;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use markup::CommonMarkTransformer;
use routes::AppState;
use store::GitStore;

/// Serve a git tree over HTTP with rendered markdown
#[derive(Parser)]
#[command(name = "treeserve")]
#[command(about = "Serve a git tree over HTTP with rendered markdown", long_about = None)]
struct Cli {
    /// Path to the repository (.git directory or work tree)
    #[arg(long, default_value = "./.git")]
    repo: String,

    /// Reference to serve (HEAD, refs/heads/develop, ...)
    #[arg(long = "ref", default_value = "HEAD")]
    reference: String,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = match GitStore::open(&cli.repo) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("✗ Failed to open repository: {}", e);
            eprintln!("  Path: {}", cli.repo);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: Arc::new(store),
        markup: Arc::new(CommonMarkTransformer::new()),
        reference: cli.reference,
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(&cli.bind).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", cli.bind, e);
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %cli.bind, repo = %cli.repo, "listening");

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
