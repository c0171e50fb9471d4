use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use webinvite_app::app::routes;
use webinvite_app::backend_handler::BackendHandler;
use webinvite_app::config::ConfigHandler;
use webinvite_core::config::{BackendKind, Settings, load_config};
use webinvite_db::db::RemoteBackend;
use webinvite_db::db::connection::create_pool;
use webinvite_db::db::memory::MemoryBackend;
use webinvite_db::db::pg::PgBackend;
use webinvite_db::storage::{FileStorage, LocalStorage};

async fn connect_backend(config: &Settings) -> anyhow::Result<Arc<dyn RemoteBackend>> {
    match config.backend.kind {
        BackendKind::Postgres => {
            let pool = create_pool(
                &config.database.url,
                u32::from(config.database.max_connections),
            )
            .await?;
            tracing::info!("Database connection pool created.");
            Ok(Arc::new(PgBackend::new(pool)))
        }
        BackendKind::Memory => {
            tracing::warn!("Using the in-memory backend; nothing is persisted remotely");
            Ok(Arc::new(MemoryBackend::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting WebInvite server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let backend = connect_backend(&config).await?;
    let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&config.storage.path)?);

    tracing::info!(path = %config.storage.path, "Preview snapshot storage opened.");

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(BackendHandler { backend, storage })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
