use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreatedIdDoc { pub id: i64 }

#[derive(ToSchema)]
pub struct ClientDoc { pub id: i64, pub name: String, pub email: String, pub phone: String, pub address: String }

#[derive(ToSchema)]
pub struct CreateClientDoc { pub name: String, pub email: String, pub phone: String, pub address: String }

#[derive(ToSchema)]
pub struct GetClientDoc { pub client: ClientDoc }

#[derive(ToSchema)]
pub struct ListClientsDoc { pub clients: Vec<ClientDoc> }

#[derive(ToSchema)]
pub struct ProductDoc { pub id: i64, pub namep: String, pub price: f64, pub stock: i64 }

#[derive(ToSchema)]
pub struct CreateProductDoc { pub namep: String, pub price: f64, pub stock: i64 }

#[derive(ToSchema)]
pub struct GetProductDoc { pub product: ProductDoc }

#[derive(ToSchema)]
pub struct ListProductsDoc { pub products: Vec<ProductDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::create,
        crate::routes::clients::get,
        crate::routes::clients::update,
        crate::routes::clients::delete,
        crate::routes::clients::list,
    ),
    components(
        schemas(HealthResponse, CreatedIdDoc, ClientDoc, CreateClientDoc, GetClientDoc, ListClientsDoc)
    ),
    tags((name = "health"), (name = "clients"))
)]
pub struct ClientsApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::products::list,
    ),
    components(
        schemas(HealthResponse, CreatedIdDoc, ProductDoc, CreateProductDoc, GetProductDoc, ListProductsDoc)
    ),
    tags((name = "health"), (name = "products"))
)]
pub struct ProductsApiDoc;
