use crate::domain::product::Product;
use crate::storage::ProductStore;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Body of every error response and of the delete confirmation.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiInfo {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub list: String,
    pub create: String,
    pub get_one: String,
    pub update: String,
    pub delete: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
