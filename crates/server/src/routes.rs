pub mod clients;
pub mod products;

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::{ClientsApiDoc, ProductsApiDoc};
use clients::ClientsState;
use products::ProductsState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        common::metrics::render(),
    )
}

/// Router for the client registry: five CRUD endpoints plus health, metrics
/// and the OpenAPI document.
pub fn build_clients_router(state: ClientsState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/:id", get(clients::get).put(clients::update).delete(clients::delete))
        .with_state(state);
    with_common_routes(api, ClientsApiDoc::openapi(), cors, request_timeout)
}

/// Router for the product catalog; same shape as the clients router.
pub fn build_products_router(state: ProductsState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::get).put(products::update).delete(products::delete))
        .with_state(state);
    with_common_routes(api, ProductsApiDoc::openapi(), cors, request_timeout)
}

fn with_common_routes(api: Router, doc: utoipa::openapi::OpenApi, cors: CorsLayer, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(move || async move { Json(doc) }))
        .merge(api)
        // dropping the handler on timeout also drops its in-flight query
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and friends
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
