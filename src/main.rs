use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use rollbookd::config::Config;
use rollbookd::logging::{init_logging, Verbosity};
use rollbookd::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    init_logging(Verbosity::from_args(&args));

    // First non-flag argument, if any, is the config file.
    let config_path = args.iter().find(|a| !a.starts_with('-')).map(PathBuf::from);
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    let addr = config.bind_addr()?;

    if config.analysis.api_key.is_none() {
        tracing::warn!("no analysis API key configured; reports will show a placeholder");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_file = %config.store.data_file.display(),
        "listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
