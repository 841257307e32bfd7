use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use models::client::{self, Entity as ClientEntity};

use super::domain::{Client, CreateClientParams, UpdateClientParams};
use crate::errors::ServiceError;

/// Storage primitives for the `clients` table.
///
/// Implementations report raw outcomes (optional row, affected count); the
/// registry decides what a missing row means.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn insert(&self, params: &CreateClientParams) -> Result<i64, ServiceError>;
    async fn find(&self, id: i64) -> Result<Option<Client>, ServiceError>;
    async fn overwrite(&self, params: &UpdateClientParams) -> Result<u64, ServiceError>;
    async fn remove(&self, id: i64) -> Result<u64, ServiceError>;
    async fn all(&self) -> Result<Vec<Client>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn insert(&self, params: &CreateClientParams) -> Result<i64, ServiceError> {
        let am = client::ActiveModel {
            id: NotSet,
            name: Set(params.name.clone()),
            email: Set(params.email.clone()),
            phone: Set(params.phone.clone()),
            address: Set(params.address.clone()),
        };
        let res = ClientEntity::insert(am)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("create", "client", e))?;
        Ok(res.last_insert_id)
    }

    async fn find(&self, id: i64) -> Result<Option<Client>, ServiceError> {
        ClientEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::db("retrieve", "client", e))
    }

    async fn overwrite(&self, params: &UpdateClientParams) -> Result<u64, ServiceError> {
        let am = client::ActiveModel {
            id: NotSet,
            name: Set(params.name.clone()),
            email: Set(params.email.clone()),
            phone: Set(params.phone.clone()),
            address: Set(params.address.clone()),
        };
        let res = ClientEntity::update_many()
            .set(am)
            .filter(client::Column::Id.eq(params.id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("update", "client", e))?;
        Ok(res.rows_affected)
    }

    async fn remove(&self, id: i64) -> Result<u64, ServiceError> {
        let res = ClientEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::db("delete", "client", e))?;
        Ok(res.rows_affected)
    }

    async fn all(&self) -> Result<Vec<Client>, ServiceError> {
        ClientEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::db("list", "clients", e))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Table {
        next_id: i64,
        rows: BTreeMap<i64, Client>,
    }

    /// Mirrors the table semantics: ids start at 1 and are never reused.
    /// `unavailable()` builds a repository whose every call fails like a
    /// lost database connection.
    #[derive(Default)]
    pub struct MockClientRepository {
        table: Mutex<Table>,
        unavailable: bool,
    }

    impl MockClientRepository {
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        fn table(&self, op: &str) -> Result<std::sync::MutexGuard<'_, Table>, ServiceError> {
            if self.unavailable {
                return Err(ServiceError::db(op, "client", "connection refused"));
            }
            self.table.lock().map_err(|_| ServiceError::db(op, "client", "mock table poisoned"))
        }
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn insert(&self, params: &CreateClientParams) -> Result<i64, ServiceError> {
            let mut t = self.table("create")?;
            t.next_id += 1;
            let id = t.next_id;
            t.rows.insert(id, Client {
                id,
                name: params.name.clone(),
                email: params.email.clone(),
                phone: params.phone.clone(),
                address: params.address.clone(),
            });
            Ok(id)
        }

        async fn find(&self, id: i64) -> Result<Option<Client>, ServiceError> {
            Ok(self.table("retrieve")?.rows.get(&id).cloned())
        }

        async fn overwrite(&self, params: &UpdateClientParams) -> Result<u64, ServiceError> {
            let mut t = self.table("update")?;
            let Some(row) = t.rows.get_mut(&params.id) else { return Ok(0) };
            row.name = params.name.clone();
            row.email = params.email.clone();
            row.phone = params.phone.clone();
            row.address = params.address.clone();
            Ok(1)
        }

        async fn remove(&self, id: i64) -> Result<u64, ServiceError> {
            Ok(self.table("delete")?.rows.remove(&id).map_or(0, |_| 1))
        }

        async fn all(&self) -> Result<Vec<Client>, ServiceError> {
            Ok(self.table("list")?.rows.values().cloned().collect())
        }
    }
}
