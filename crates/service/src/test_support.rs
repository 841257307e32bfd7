#![cfg(test)]
use migration::{ClientsMigrator, MigratorTrait, ProductsMigrator};
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with both schemas applied.
///
/// A single pooled connection keeps every statement on the same memory
/// database; each call gets its own isolated instance.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    ClientsMigrator::up(&db, None).await?;
    ProductsMigrator::up(&db, None).await?;
    Ok(db)
}
