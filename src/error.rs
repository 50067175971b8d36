use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced at the HTTP boundary
///
/// Scoring itself never fails; these only describe bad input.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("limit {requested} exceeds the maximum of {max}")]
    LimitExceeded { requested: u16, max: u16 },
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "Invalid JSON",
            ApiError::InvalidQuery(_) => "Invalid query",
            ApiError::Validation(_) => "Validation failed",
            ApiError::LimitExceeded { .. } => "Limit too large",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_limit_exceeded_is_bad_request() {
        let err = ApiError::LimitExceeded { requested: 500, max: 100 };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "limit 500 exceeds the maximum of 100");
    }

    #[test]
    fn test_invalid_json_message() {
        let err = ApiError::InvalidJson("expected value".to_string());
        assert_eq!(err.kind(), "Invalid JSON");
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_error_kinds_share_one_style() {
        let kinds = [
            ApiError::InvalidJson(String::new()).kind(),
            ApiError::InvalidQuery(String::new()).kind(),
            ApiError::LimitExceeded { requested: 2, max: 1 }.kind(),
        ];
        assert_eq!(kinds, ["Invalid JSON", "Invalid query", "Limit too large"]);
        assert!(kinds.iter().all(|k| !k.contains('_')));
    }
}
