use std::{net::SocketAddr, time::Duration};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::{ClientsMigrator, MigratorTrait, ProductsMigrator};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, clients::ClientsState, products::ProductsState};

/// Which of the two independently deployable services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Clients,
    Products,
}

impl ServiceKind {
    /// Short name used for config lookup, env prefixes, logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Clients => "clients",
            ServiceKind::Products => "products",
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Apply the service's own migrations to `db`.
pub async fn migrate(kind: ServiceKind, db: &DatabaseConnection) -> anyhow::Result<()> {
    match kind {
        ServiceKind::Clients => ClientsMigrator::up(db, None).await?,
        ServiceKind::Products => ProductsMigrator::up(db, None).await?,
    }
    info!(service = kind.name(), "migrations applied");
    Ok(())
}

/// Open the pool and, when asked, bring the schema up to date.
pub async fn connect_and_migrate(
    kind: ServiceKind,
    database: &DatabaseConfig,
    run_migrations: bool,
) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(database).await?;
    if run_migrations {
        migrate(kind, &db).await?;
    }
    Ok(db)
}

/// Router for `kind` over an already connected database.
pub fn build_app(kind: ServiceKind, db: DatabaseConnection, server: &ServerConfig) -> Router {
    let timeout = Duration::from_secs(server.request_timeout_secs);
    match kind {
        ServiceKind::Clients => routes::build_clients_router(ClientsState::from_db(db), build_cors(), timeout),
        ServiceKind::Products => routes::build_products_router(ProductsState::from_db(db), build_cors(), timeout),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}

/// Public entry: connect, migrate, build the app and serve until shutdown.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_and_migrate(kind, &cfg.database, cfg.server.run_migrations).await?;
    let app = build_app(kind, db.clone(), &cfg.server);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(service = kind.name(), %addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(service = kind.name(), "database pool closed");
    Ok(())
}
