//! Songbook server binary

use anyhow::{anyhow, Context};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songbook::api::{create_item_router, create_song_router, ItemState, SongState};
use songbook::config::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    if let Err(err) = run(config).await {
        tracing::error!(error = %format!("{err:#}"), "Server failed");
        return Err(err);
    }

    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut servers = JoinSet::new();

    if config.songs.enabled {
        let state = SongState::seeded(config.songs.seed.clone(), config.songs.id_strategy);
        tracing::info!(
            seeded = config.songs.seed.len(),
            id_strategy = ?config.songs.id_strategy,
            "Song store initialised"
        );

        let listener = bind("songs", &config.songs.addr(), config.songs.port).await?;
        servers.spawn(serve(
            "songs",
            listener,
            create_song_router(state),
            shutdown_rx.clone(),
        ));
    }

    if config.items.enabled {
        let state = ItemState::seeded(config.items.seed.clone());
        tracing::info!(
            seeded = config.items.seed.len(),
            legacy_get_append = config.items.legacy_get_append,
            "Item store initialised"
        );

        let listener = bind("items", &config.items.addr(), config.items.port).await?;
        servers.spawn(serve(
            "items",
            listener,
            create_item_router(state, config.items.legacy_get_append),
            shutdown_rx.clone(),
        ));
    }

    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    while let Some(joined) = servers.join_next().await {
        joined.map_err(|e| anyhow!("server task failed: {}", e))??;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn bind(service: &'static str, addr: &str, port: u16) -> anyhow::Result<TcpListener> {
    tracing::info!(service, "Starting server at port {}", port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {} service to {}", service, addr))?;
    tracing::info!(service, %addr, "Listening for HTTP traffic");

    Ok(listener)
}

async fn serve(
    service: &'static str,
    listener: TcpListener,
    router: Router,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .with_context(|| format!("{} service error", service))?;

    tracing::info!(service, "Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        },
    }
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("songbook=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
