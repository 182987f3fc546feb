//! troth server binary.
//!
//! Serves the static wedding site and the JSON data API from one
//! process. Reads `config.toml` (or the path given with `--config`)
//! overlaid with `TROTH_`-prefixed environment variables; with nothing
//! configured it runs entirely against local fallback storage.

mod backend;
mod settings;

use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use backend::Backend;
use settings::Settings;

#[derive(Parser)]
#[command(author, version, about = "Wedding site and gift-registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: std::path::PathBuf,

  /// Use local storage even if a hosted store is configured.
  #[arg(long)]
  offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let store = Arc::new(Backend::select(&settings, cli.offline));

  let app = Router::new()
    .nest("/api", troth_api::api_router(store))
    .fallback_service(ServeDir::new(&settings.site_dir))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", settings.host, settings.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
