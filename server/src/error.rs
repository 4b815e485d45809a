//! HTTP-facing errors.
//!
//! Two kinds reach a client: a missing todo (404) and input that failed
//! validation (422). Both bodies carry a `detail` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::FieldError;

pub const NOT_FOUND_DETAIL: &str = "Todo not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("invalid input: {} field error(s)", .0.len())]
    InvalidInput(Vec<FieldError>),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::InvalidInput(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": NOT_FOUND_DETAIL })),
            )
                .into_response(),
            ApiError::InvalidInput(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound(3).into();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_maps_to_422() {
        let err = ApiError::from(vec![FieldError::json_invalid("eof")]);
        assert_eq!(err.to_string(), "invalid input: 1 field error(s)");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
