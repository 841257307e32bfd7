use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{
    CreateClientParams, CreateClientResponse, GetClientResponse, ListClientsResponse, UpdateClientParams,
};
use super::repository::ClientRepository;
use crate::errors::ServiceError;

/// Client registry: one storage statement per call, no business rules.
pub struct ClientRegistry<R: ClientRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ClientRepository + ?Sized> ClientRegistry<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Insert a client and return the id storage assigned.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::clients::{ClientRegistry, domain::CreateClientParams, repository::mock::MockClientRepository};
    /// let registry = ClientRegistry::new(Arc::new(MockClientRepository::default()));
    /// let params = CreateClientParams { name: "Ana".into(), email: "ana@x.com".into(), phone: "555".into(), address: "Main St".into() };
    /// let created = tokio_test::block_on(registry.create(params)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: CreateClientParams) -> Result<CreateClientResponse, ServiceError> {
        let id = self.repo.insert(&params).await?;
        info!(client_id = id, "client_created");
        Ok(CreateClientResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<GetClientResponse, ServiceError> {
        let client = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("client", id))?;
        Ok(GetClientResponse { client })
    }

    /// Overwrite all four mutable fields of the client `params.id`.
    #[instrument(skip(self, params), fields(client_id = params.id))]
    pub async fn update(&self, params: UpdateClientParams) -> Result<(), ServiceError> {
        match self.repo.overwrite(&params).await? {
            0 => Err(ServiceError::not_found("client", params.id)),
            _ => {
                info!(client_id = params.id, "client_updated");
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        match self.repo.remove(id).await? {
            0 => Err(ServiceError::not_found("client", id)),
            _ => {
                info!(client_id = id, "client_deleted");
                Ok(())
            }
        }
    }

    /// Every row, unordered and fully materialized.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<ListClientsResponse, ServiceError> {
        let clients = self.repo.all().await?;
        Ok(ListClientsResponse { clients })
    }
}
