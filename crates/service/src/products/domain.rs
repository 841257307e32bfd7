use serde::{Deserialize, Serialize};

/// Wire record for a product: `{id, namep, price, stock}`.
pub type Product = models::product::Model;

/// Body of CreateProduct. Absent fields decode as zero values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateProductParams {
    pub namep: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateProductResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateProductParams {
    pub id: i64,
    pub namep: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GetProductResponse {
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
}
