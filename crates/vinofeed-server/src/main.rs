mod api;
mod middleware;
mod scheduler;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use vinofeed_store::{StoreClientConfig, WooClient};
use vinofeed_xml::FeedStore;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = vinofeed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = FeedStore::new(&config.storage_dir);
    let client = Arc::new(WooClient::new(&StoreClientConfig::from_app_config(&config))?);

    let _scheduler =
        scheduler::build_scheduler(client, store.clone(), config.feed_schedule.as_deref()).await?;

    let app = build_app(AppState { store });

    tracing::info!(bind_addr = %config.bind_addr, env = %config.env, "serving vivino feed");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves on ctrl-c or, on unix, SIGTERM. A handler that cannot be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "ctrl-c",
        () = sigterm => "SIGTERM",
    };
    tracing::info!(signal, "shutting down; finishing in-flight requests");
}
