//! SeaORM entities for the `clients` and `products` tables, plus the
//! connection helper both services use.

pub mod db;
pub mod client;
pub mod product;

#[cfg(test)]
mod tests {
    use migration::{ClientsMigrator, MigratorTrait, ProductsMigrator};
    use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

    use crate::{client, db, product};

    async fn memory_db() -> anyhow::Result<sea_orm::DatabaseConnection> {
        let cfg = configs::DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let db = db::connect_with_config(&cfg).await?;
        ClientsMigrator::up(&db, None).await?;
        ProductsMigrator::up(&db, None).await?;
        Ok(db)
    }

    #[tokio::test]
    async fn client_entity_round_trips_through_table() -> anyhow::Result<()> {
        let db = memory_db().await?;
        let am = client::ActiveModel {
            id: NotSet,
            name: Set("Ana".into()),
            email: Set("ana@x.com".into()),
            phone: Set("555".into()),
            address: Set("Main St".into()),
        };
        let created = am.insert(&db).await?;
        assert!(created.id > 0);

        let found = client::Entity::find_by_id(created.id).one(&db).await?.unwrap();
        assert_eq!(found, created);
        Ok(())
    }

    #[tokio::test]
    async fn product_entity_keeps_price_and_stock() -> anyhow::Result<()> {
        let db = memory_db().await?;
        let am = product::ActiveModel {
            id: NotSet,
            namep: Set("Widget".into()),
            price: Set(9.99),
            stock: Set(-3),
        };
        let created = am.insert(&db).await?;
        let found = product::Entity::find_by_id(created.id).one(&db).await?.unwrap();
        assert_eq!(found.namep, "Widget");
        assert_eq!(found.price, 9.99);
        assert_eq!(found.stock, -3);
        Ok(())
    }

    #[test]
    fn wire_names_match_columns() {
        let p = product::Model { id: 3, namep: "Widget".into(), price: 1.5, stock: 2 };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v, serde_json::json!({"id": 3, "namep": "Widget", "price": 1.5, "stock": 2}));
    }
}
