// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::StoreError;
use crate::services::payment_intent::PaymentError;

/// HTTP API error with appropriate status codes and client-facing messages.
///
/// Authentication and authorization denials always carry the fixed body
/// `{"message": "forbidden access"}` so callers cannot distinguish why a
/// gate rejected them.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),

    // 502 Bad Gateway (payment provider issues)
    BadGateway(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
            ApiError::BadGateway(_) => 502,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg)
            | ApiError::BadGateway(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Authentication denial with the fixed gate message.
    pub fn unauthenticated() -> Self {
        ApiError::Unauthorized("forbidden access".to_string())
    }

    /// Authorization denial with the fixed gate message.
    pub fn forbidden() -> Self {
        ApiError::Forbidden("forbidden access".to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => ApiError::not_found(msg),
            StoreError::ConfigMissing(what) => {
                tracing::error!("missing store configuration: {}", what);
                ApiError::service_unavailable("database unavailable")
            }
            StoreError::Sqlx(sqlx::Error::PoolTimedOut) | StoreError::Sqlx(sqlx::Error::Io(_)) => {
                ApiError::service_unavailable("database unavailable")
            }
            StoreError::Sqlx(e) => {
                // Log the real error but return a generic message
                tracing::error!("database error: {}", e);
                ApiError::internal("an error occurred while processing your request")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::InvalidToken(reason) => {
                tracing::warn!("token verification failed: {}", reason);
                ApiError::unauthenticated()
            }
            AuthError::MissingSecret | AuthError::TokenGeneration(_) => {
                tracing::error!("token service error: {}", err);
                ApiError::internal("token service unavailable")
            }
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount(msg) => ApiError::bad_request(msg),
            PaymentError::NotConfigured => {
                tracing::error!("payment provider secret key is not configured");
                ApiError::service_unavailable("payment provider unavailable")
            }
            PaymentError::Provider(msg) => {
                tracing::error!("payment provider rejected request: {}", msg);
                ApiError::bad_gateway("payment provider error")
            }
            PaymentError::Http(e) => {
                tracing::error!("payment provider request failed: {}", e);
                ApiError::bad_gateway("payment provider unreachable")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_denials_use_fixed_message() {
        let unauthenticated = ApiError::unauthenticated();
        assert_eq!(unauthenticated.status_code(), 401);
        assert_eq!(unauthenticated.to_json(), json!({ "message": "forbidden access" }));

        let forbidden = ApiError::forbidden();
        assert_eq!(forbidden.status_code(), 403);
        assert_eq!(forbidden.to_json(), json!({ "message": "forbidden access" }));
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound("pet not found".to_string()).into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "pet not found");
    }

    #[test]
    fn store_connectivity_maps_to_503() {
        let err: ApiError = StoreError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), 503);
    }
}
