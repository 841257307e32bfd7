use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use service::errors::ServiceError;
use service::products::{
    domain::{CreateProductParams, CreateProductResponse, GetProductResponse, ListProductsResponse, UpdateProductParams},
    ProductCatalog, ProductRepository, SeaOrmProductRepository,
};

use crate::errors::JsonApiError;

const SERVICE: &str = "products";

#[derive(Clone)]
pub struct ProductsState {
    pub catalog: Arc<ProductCatalog<dyn ProductRepository>>,
}

impl ProductsState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { catalog: Arc::new(ProductCatalog::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmProductRepository::new(db)))
    }
}

fn observe<T>(operation: &str, res: &Result<T, ServiceError>) {
    common::metrics::record(SERVICE, operation, res.is_ok());
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ProductsState>,
    Json(params): Json<CreateProductParams>,
) -> Result<Json<CreateProductResponse>, JsonApiError> {
    let res = state.catalog.create(params).await;
    observe("create", &res);
    res.map(Json).map_err(|e| JsonApiError::from_service("Create Failed", e))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GetProductDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Get Failed")
    )
)]
pub async fn get(State(state): State<ProductsState>, Path(id): Path<i64>) -> Result<Json<GetProductResponse>, JsonApiError> {
    let res = state.catalog.get(id).await;
    observe("get", &res);
    res.map(Json).map_err(|e| JsonApiError::from_service("Get Failed", e))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ProductsState>,
    Path(id): Path<i64>,
    Json(mut params): Json<UpdateProductParams>,
) -> Result<StatusCode, JsonApiError> {
    params.id = id;
    let res = state.catalog.update(params).await;
    observe("update", &res);
    res.map(|()| StatusCode::NO_CONTENT).map_err(|e| JsonApiError::from_service("Update Failed", e))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ProductsState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    let res = state.catalog.delete(id).await;
    observe("delete", &res);
    res.map(|()| StatusCode::NO_CONTENT).map_err(|e| JsonApiError::from_service("Delete Failed", e))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ListProductsDoc),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ProductsState>) -> Result<Json<ListProductsResponse>, JsonApiError> {
    let res = state.catalog.list().await;
    observe("list", &res);
    res.map(Json).map_err(|e| JsonApiError::from_service("List Failed", e))
}
