use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::ApiResponse;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response rendered as an `ApiResponse` JSON body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Required request body missing or unreadable.
    pub fn invalid_input() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "no data")
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::new(self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::IdSpaceExhausted => {
                error!("pet id space exhausted");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "no pet ids left to assign")
            }
            ServiceError::Io(err) => {
                error!(error = %err, "service io failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error("server io failure: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let e: JsonApiError = ServiceError::Validation("bad".into()).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e: JsonApiError = ServiceError::IdSpaceExhausted.into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "no pet ids left to assign");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e: JsonApiError = ServiceError::Io(io).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_input_is_405() {
        let resp = JsonApiError::invalid_input().into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
