use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use service::clients::{
    domain::{CreateClientParams, CreateClientResponse, GetClientResponse, ListClientsResponse, UpdateClientParams},
    ClientRegistry, ClientRepository, SeaOrmClientRepository,
};
use service::errors::ServiceError;

use crate::errors::JsonApiError;

const SERVICE: &str = "clients";

/// Handler state: the registry over an injected repository.
#[derive(Clone)]
pub struct ClientsState {
    pub registry: Arc<ClientRegistry<dyn ClientRepository>>,
}

impl ClientsState {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { registry: Arc::new(ClientRegistry::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmClientRepository::new(db)))
    }
}

fn observe<T>(operation: &str, res: &Result<T, ServiceError>) {
    common::metrics::record(SERVICE, operation, res.is_ok());
}

#[utoipa::path(
    post, path = "/clients", tag = "clients",
    request_body = crate::openapi::CreateClientDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ClientsState>,
    Json(params): Json<CreateClientParams>,
) -> Result<Json<CreateClientResponse>, JsonApiError> {
    let res = state.registry.create(params).await;
    observe("create", &res);
    res.map(Json).map_err(|e| JsonApiError::from_service("Create Failed", e))
}

#[utoipa::path(
    get, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GetClientDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Get Failed")
    )
)]
pub async fn get(State(state): State<ClientsState>, Path(id): Path<i64>) -> Result<Json<GetClientResponse>, JsonApiError> {
    let res = state.registry.get(id).await;
    observe("get", &res);
    res.map(Json).map_err(|e| JsonApiError::from_service("Get Failed", e))
}

#[utoipa::path(
    put, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = crate::openapi::CreateClientDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ClientsState>,
    Path(id): Path<i64>,
    Json(mut params): Json<UpdateClientParams>,
) -> Result<StatusCode, JsonApiError> {
    // the path is the only key; a body id is ignored
    params.id = id;
    let res = state.registry.update(params).await;
    observe("update", &res);
    res.map(|()| StatusCode::NO_CONTENT).map_err(|e| JsonApiError::from_service("Update Failed", e))
}

#[utoipa::path(
    delete, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ClientsState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    let res = state.registry.delete(id).await;
    observe("delete", &res);
    res.map(|()| StatusCode::NO_CONTENT).map_err(|e| JsonApiError::from_service("Delete Failed", e))
}

#[utoipa::path(
    get, path = "/clients", tag = "clients",
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ListClientsDoc),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ClientsState>) -> Result<Json<ListClientsResponse>, JsonApiError> {
    let res = state.registry.list().await;
    observe("list", &res);
    if let Ok(list) = &res {
        tracing::debug!(count = list.clients.len(), "list clients");
    }
    res.map(Json).map_err(|e| JsonApiError::from_service("List Failed", e))
}
