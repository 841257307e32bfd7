use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{DatabaseConfig, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, products::ProductsState};
use server::startup::{build_app, connect_and_migrate};
use service::products::repository::mock::MockProductRepository;
use server::ServiceKind;

/// Products service wired exactly as the binary does, over in-memory SQLite.
async fn sqlite_app() -> anyhow::Result<Router> {
    let database = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_and_migrate(ServiceKind::Products, &database, true).await?;
    let server = ServerConfig { request_timeout_secs: 5, ..ServerConfig::default() };
    Ok(build_app(ServiceKind::Products, db, &server))
}

/// Products router over the in-memory repository.
fn mock_app(repo: MockProductRepository) -> Router {
    routes::build_products_router(
        ProductsState::new(Arc::new(repo)),
        tower_http::cors::CorsLayer::very_permissive(),
        Duration::from_secs(5),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn widget_scenario() -> anyhow::Result<()> {
    let app = sqlite_app().await?;

    let (status, body) = send(&app, "POST", "/products", Some(json!({"namep": "Widget", "price": 9.99, "stock": 100}))).await?;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/products/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"product": {"id": id, "namep": "Widget", "price": 9.99, "stock": 100}}));

    let (_, body) = send(&app, "GET", "/products", None).await?;
    assert!(body["products"].as_array().unwrap().iter().any(|p| p["id"] == id));

    let (status, _) = send(&app, "DELETE", &format!("/products/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/products", None).await?;
    assert!(!body["products"].as_array().unwrap().iter().any(|p| p["id"] == id));

    let (status, _) = send(&app, "GET", &format!("/products/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_overwrites_all_fields() -> anyhow::Result<()> {
    let app = sqlite_app().await?;
    let (_, body) = send(&app, "POST", "/products", Some(json!({"namep": "Widget", "price": 9.99, "stock": 100}))).await?;
    let id = body["id"].as_i64().unwrap();

    let (status, _) = send(&app, "PUT", &format!("/products/{id}"), Some(json!({"namep": "Widget XL"}))).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/products/{id}"), None).await?;
    assert_eq!(body["product"], json!({"id": id, "namep": "Widget XL", "price": 0.0, "stock": 0}));
    Ok(())
}

#[tokio::test]
async fn missing_product_update_and_delete_are_not_found() -> anyhow::Result<()> {
    let app = sqlite_app().await?;
    let (status, body) = send(&app, "PUT", "/products/5", Some(json!({"namep": "x", "price": 1.0, "stock": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "product 5 not found");
    let (status, _) = send(&app, "DELETE", "/products/5", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn products_service_does_not_serve_clients() -> anyhow::Result<()> {
    let app = sqlite_app().await?;
    let (status, _) = send(&app, "GET", "/clients", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_returns_every_created_product() -> anyhow::Result<()> {
    let app = sqlite_app().await?;
    let (_, body) = send(&app, "GET", "/products", None).await?;
    assert_eq!(body, json!({"products": []}));

    for (namep, stock) in [("bolt", 10), ("nut", 20), ("washer", 30)] {
        let (status, _) = send(&app, "POST", "/products", Some(json!({"namep": namep, "price": 0.25, "stock": stock}))).await?;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = send(&app, "GET", "/products", None).await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["products"].as_array().unwrap().iter().map(|p| p["namep"].as_str().unwrap()).collect();
    assert_eq!(names.len(), 3);
    for namep in ["bolt", "nut", "washer"] {
        assert!(names.contains(&namep));
    }
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_500_with_message() -> anyhow::Result<()> {
    let app = mock_app(MockProductRepository::unavailable());
    let (status, body) = send(&app, "POST", "/products", Some(json!({"namep": "Widget", "price": 9.99, "stock": 100}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Create Failed");
    assert_eq!(body["detail"], "could not create product: connection refused");

    let (status, body) = send(&app, "GET", "/products", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "List Failed");

    // a dead database is not reported as a missing row
    let (status, body) = send(&app, "DELETE", "/products/1", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Delete Failed");
    Ok(())
}
