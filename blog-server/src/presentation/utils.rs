use actix_web::web;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// A path segment that is not a UUID cannot name a stored post.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::PostNotFound(raw.to_string()))
}

/// Malformed or mistyped JSON bodies become the same 400 body as other request errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| DomainError::InvalidRequest(err.to_string()).into())
}
