use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{debug, error};

/// JSON error body: `{"error": <summary>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self { status, error: error.to_string(), detail }
    }

    /// Map a service failure: missing rows are 404, storage failures 500
    /// with `failed` as the summary (e.g. "Create Failed").
    pub fn from_service(failed: &str, e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => {
                debug!(detail = %msg, "not found");
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
            }
            ServiceError::Db(msg) => {
                error!(err = %msg, summary = failed, "storage call failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failed, Some(msg))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => serde_json::json!({"error": self.error, "detail": detail}),
            None => serde_json::json!({"error": self.error}),
        };
        (self.status, Json(body)).into_response()
    }
}
