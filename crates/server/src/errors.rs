use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::response::ErrorBody;

/// Error returned by every API handler, rendered as the standard envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "Resource already exists"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return ApiError::BadRequest(e.to_string());
        }
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError::BadRequest(r.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        ApiError::BadRequest(r.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        ApiError::BadRequest(r.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        // Internal details stay in the logs.
        let detail = match &self {
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                "an unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody { success: false, message: message.to_string(), error: detail };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("name: is required".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("guest"), StatusCode::NOT_FOUND),
            (ServiceError::conflict("guest", "email", "a@b.com"), StatusCode::CONFLICT),
            (ServiceError::Db("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, want) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), want);
        }
    }

    #[test]
    fn model_validation_is_bad_request() {
        let e = ServiceError::from(models::errors::ModelError::invalid("email", "must be a valid email address"));
        assert!(matches!(ApiError::from(e), ApiError::BadRequest(_)));
    }
}
