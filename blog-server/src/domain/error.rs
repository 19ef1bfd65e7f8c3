use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("missing required field: {field}")]
    Validation { field: &'static str },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation { .. } | DomainError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::PostNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let details = match self {
            DomainError::Validation { field } => Some(json!({ "field": field })),
            DomainError::PostNotFound(resource) => Some(json!({ "resource": resource })),
            DomainError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                None
            }
            DomainError::InvalidRequest(_) => None,
        };
        let body = ErrorBody {
            error: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
