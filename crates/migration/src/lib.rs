//! Migrators for the two services.
//!
//! Each service owns its table and keeps its own history table, so both
//! migrators can run against one shared database or against two separate
//! ones without seeing each other's entries.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_clients;
mod m20240101_000002_create_products;

/// Schema for the client registry (`clients` table).
pub struct ClientsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ClientsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_clients::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_clients").into_iden()
    }
}

/// Schema for the product catalog (`products` table).
pub struct ProductsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ProductsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_products::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_products").into_iden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, Statement};

    #[tokio::test]
    async fn both_migrators_share_one_database() -> Result<(), DbErr> {
        // one connection, otherwise each pooled connection sees its own memory db
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        ClientsMigrator::up(&db, None).await?;
        ProductsMigrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("clients").await?);
        assert!(manager.has_table("products").await?);

        // a second run is a no-op
        ClientsMigrator::up(&db, None).await?;
        ProductsMigrator::up(&db, None).await?;

        ProductsMigrator::down(&db, None).await?;
        assert!(!manager.has_table("products").await?);
        assert!(manager.has_table("clients").await?);

        let backend = db.get_database_backend();
        db.execute(Statement::from_string(
            backend,
            "INSERT INTO clients (name, email, phone, address) VALUES ('a', 'b', 'c', 'd')",
        ))
        .await?;
        Ok(())
    }
}
