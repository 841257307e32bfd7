use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use models::product::{self, Entity as ProductEntity};

use super::domain::{CreateProductParams, Product, UpdateProductParams};
use crate::errors::ServiceError;

/// Storage primitives for the `products` table.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, params: &CreateProductParams) -> Result<i64, ServiceError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    async fn overwrite(&self, params: &UpdateProductParams) -> Result<u64, ServiceError>;
    async fn remove(&self, id: i64) -> Result<u64, ServiceError>;
    async fn all(&self) -> Result<Vec<Product>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn active_model(namep: &str, price: f64, stock: i64) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        namep: Set(namep.to_string()),
        price: Set(price),
        stock: Set(stock),
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, params: &CreateProductParams) -> Result<i64, ServiceError> {
        let res = ProductEntity::insert(active_model(&params.namep, params.price, params.stock))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("create", "product", e))?;
        Ok(res.last_insert_id)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::db("retrieve", "product", e))
    }

    async fn overwrite(&self, params: &UpdateProductParams) -> Result<u64, ServiceError> {
        let res = ProductEntity::update_many()
            .set(active_model(&params.namep, params.price, params.stock))
            .filter(product::Column::Id.eq(params.id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("update", "product", e))?;
        Ok(res.rows_affected)
    }

    async fn remove(&self, id: i64) -> Result<u64, ServiceError> {
        let res = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("delete", "product", e))?;
        Ok(res.rows_affected)
    }

    async fn all(&self) -> Result<Vec<Product>, ServiceError> {
        ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::db("list", "products", e))
    }
}

/// In-memory stand-in for the `products` table.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        next_id: i64,
        rows: BTreeMap<i64, Product>,
    }

    #[derive(Default)]
    pub struct MockProductRepository {
        table: Mutex<Table>,
        unavailable: bool,
    }

    impl MockProductRepository {
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        fn table(&self, op: &str) -> Result<MutexGuard<'_, Table>, ServiceError> {
            if self.unavailable {
                return Err(ServiceError::db(op, "product", "connection refused"));
            }
            self.table.lock().map_err(|_| ServiceError::db(op, "product", "mock table poisoned"))
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn insert(&self, params: &CreateProductParams) -> Result<i64, ServiceError> {
            let mut t = self.table("create")?;
            t.next_id += 1;
            let id = t.next_id;
            t.rows.insert(id, Product { id, namep: params.namep.clone(), price: params.price, stock: params.stock });
            Ok(id)
        }

        async fn find(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            Ok(self.table("retrieve")?.rows.get(&id).cloned())
        }

        async fn overwrite(&self, params: &UpdateProductParams) -> Result<u64, ServiceError> {
            let mut t = self.table("update")?;
            let Some(row) = t.rows.get_mut(&params.id) else { return Ok(0) };
            row.namep = params.namep.clone();
            row.price = params.price;
            row.stock = params.stock;
            Ok(1)
        }

        async fn remove(&self, id: i64) -> Result<u64, ServiceError> {
            Ok(self.table("delete")?.rows.remove(&id).map_or(0, |_| 1))
        }

        async fn all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.table("list")?.rows.values().cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmProductRepository::new(get_db().await?);

        let id = repo.insert(&CreateProductParams { namep: "Widget".into(), price: 9.99, stock: 100 }).await?;
        let found = repo.find(id).await?.unwrap();
        assert_eq!(found, Product { id, namep: "Widget".into(), price: 9.99, stock: 100 });

        let changed = UpdateProductParams { id, namep: "Gadget".into(), price: 0.5, stock: 0 };
        assert_eq!(repo.overwrite(&changed).await?, 1);
        assert_eq!(repo.find(id).await?.unwrap(), Product { id, namep: "Gadget".into(), price: 0.5, stock: 0 });

        assert_eq!(repo.remove(id).await?, 1);
        assert_eq!(repo.remove(id).await?, 0);
        assert!(repo.all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_surfaces_storage_failure() -> Result<(), anyhow::Error> {
        let broken = SeaOrmProductRepository::new(sea_orm::Database::connect("sqlite::memory:").await?);
        let err = broken.find(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(ref m) if m.starts_with("could not retrieve product:")));
        Ok(())
    }
}
