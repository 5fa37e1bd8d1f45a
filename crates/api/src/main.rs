//! API server entry point.

use std::sync::Arc;
use std::time::Duration;

use api::config::{Config, StorageBackend};
use audit::{AuditSink, PostgresAuditSink};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use stock_ledger::{InMemoryStockStore, PostgresStockStore, StockStore};
use supplier::HttpSupplierClient;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Builds the state for the selected backend and runs the server.
async fn serve<S>(
    store: S,
    config: Config,
    audit_sink: Option<Arc<dyn AuditSink>>,
    metrics_handle: PrometheusHandle,
) where
    S: StockStore + Clone + 'static,
{
    let supplier = HttpSupplierClient::with_timeout(
        config.supplier_base_url.as_str(),
        Duration::from_secs(config.supplier_timeout_secs),
    )
    .expect("failed to build supplier client");

    let state = api::create_state(store, supplier, config.restock_policy(), audit_sink);
    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}

#[tokio::main]
async fn main() {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let prometheus_builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = prometheus_builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Load configuration (read once; no hot reload)
    let config = Config::from_env();

    // 4. Connect to PostgreSQL when the durable backend or audit
    //    logging needs it, and apply migrations
    let pool = if config.backend == StorageBackend::Postgres || config.audit_enabled {
        let url = config
            .database_url
            .clone()
            .expect("DATABASE_URL must be set for the postgres backend or audit logging");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("failed to connect to PostgreSQL");
        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("database migrations failed");
        Some(pool)
    } else {
        None
    };

    let audit_sink: Option<Arc<dyn AuditSink>> = if config.audit_enabled {
        pool.clone()
            .map(|p| Arc::new(PostgresAuditSink::new(p)) as Arc<dyn AuditSink>)
    } else {
        None
    };

    // 5. Select the storage backend, once, and run the server
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory stock backend");
            serve(InMemoryStockStore::new(), config, audit_sink, metrics_handle).await;
        }
        StorageBackend::Postgres => {
            tracing::info!("using PostgreSQL stock backend");
            let pool = pool.expect("pool exists for the postgres backend");
            serve(
                PostgresStockStore::new(pool),
                config,
                audit_sink,
                metrics_handle,
            )
            .await;
        }
    }
}
