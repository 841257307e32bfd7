use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of `products`; also the `product` record on the wire.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub namep: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
