use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::LookupKind;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid product id '{0}': expected 24 characters")]
    InvalidId(String),

    #[error("No product found with {kind} '{key}'")]
    NotFound { kind: LookupKind, key: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn not_found(kind: LookupKind, key: impl Into<String>) -> Self {
        ProductError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId(_) => AppError::InvalidIdentifier(err.to_string()),
            ProductError::NotFound { .. } => AppError::NotFound(err.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for ProductError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        ProductError::Validation(format!("Invalid ObjectId: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ProductError::InvalidId("abc".into()), StatusCode::BAD_REQUEST),
            (
                ProductError::not_found(LookupKind::Id, "602d2149e773f2a3990b47f5"),
                StatusCode::NOT_FOUND,
            ),
            (
                ProductError::Validation("name is empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductError::Database("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_names_the_key() {
        let err = ProductError::not_found(LookupKind::Category, "Tools");
        assert_eq!(err.to_string(), "No product found with category 'Tools'");
    }

    #[test]
    fn test_invalid_id_and_not_found_map_to_distinct_errors() {
        let invalid: AppError = ProductError::InvalidId("short".into()).into();
        let missing: AppError = ProductError::not_found(LookupKind::Id, "x".repeat(24)).into();
        assert!(matches!(invalid, AppError::InvalidIdentifier(_)));
        assert!(matches!(missing, AppError::NotFound(_)));
    }
}
