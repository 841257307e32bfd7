use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{
    CreateProductParams, CreateProductResponse, GetProductResponse, ListProductsResponse, UpdateProductParams,
};
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Product catalog; same contract as the client registry over `products`.
pub struct ProductCatalog<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductCatalog<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, params), fields(namep = %params.namep))]
    pub async fn create(&self, params: CreateProductParams) -> Result<CreateProductResponse, ServiceError> {
        let id = self.repo.insert(&params).await?;
        info!(product_id = id, "product_created");
        Ok(CreateProductResponse { id })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<GetProductResponse, ServiceError> {
        let product = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("product", id))?;
        Ok(GetProductResponse { product })
    }

    #[instrument(skip(self, params), fields(product_id = params.id))]
    pub async fn update(&self, params: UpdateProductParams) -> Result<(), ServiceError> {
        if self.repo.overwrite(&params).await? == 0 {
            return Err(ServiceError::not_found("product", params.id));
        }
        info!(product_id = params.id, "product_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.remove(id).await? == 0 {
            return Err(ServiceError::not_found("product", id));
        }
        info!(product_id = id, "product_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<ListProductsResponse, ServiceError> {
        Ok(ListProductsResponse { products: self.repo.all().await? })
    }
}
