//! The three ways a request can fail, and their single mapping onto HTTP.

use crate::domain::product::ValidationErrors;
use crate::storage::StoreError;
use crate::transport::http::types::MessageResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad identifier, malformed body or failed field validation.
    #[error("{0}")]
    ClientFault(String),

    #[error("Product not found")]
    NotFound,

    /// Storage unreachable or erroring.
    #[error("{0}")]
    ServerFault(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ClientFault(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ServerFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_id() -> Self {
        ApiError::ClientFault(INVALID_PRODUCT_ID.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::ClientFault(err.message().to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::ServerFault(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::ClientFault(format!("Invalid JSON body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::ServerFault(msg) => tracing::error!(error = %msg, "Responding with server fault"),
            other => tracing::warn!(status = status.as_u16(), error = %other, "Request rejected"),
        }
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
