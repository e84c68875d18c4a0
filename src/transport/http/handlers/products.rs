use crate::domain::product::{validate_new, validate_patch, Product, ProductInput};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{AppState, MessageResponse, ProductResponse};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;
use tracing::{info, instrument};
use uuid::Uuid;

pub const CREATED_MESSAGE: &str = "Product added successfully!";
pub const UPDATED_MESSAGE: &str = "Product updated successfully!";
pub const DELETED_MESSAGE: &str = "🗑️ Product deleted successfully";

fn parse_product_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::invalid_id())
}

/// Undecodable path segments (e.g. `%FF`) are reported the same way as malformed ids.
fn product_id(path: Result<Path<String>, PathRejection>) -> Result<Uuid, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::invalid_id())?;
    parse_product_id(&raw)
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products, newest first", body = [Product]),
        (status = 500, description = "Storage fault", body = MessageResponse)
    )
)]
#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await?;
    info!(count = products.len(), "Listed products");
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed or malformed body", body = MessageResponse),
        (status = 500, description = "Storage fault", body = MessageResponse)
    )
)]
#[instrument(name = "handler::create_product", skip(state, body))]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let Json(payload) = body?;
    let candidate = validate_new(&payload)?;
    let product = state.store.insert(candidate).await?;
    info!(product_id = %product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: CREATED_MESSAGE.to_string(),
            product,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier (UUID)")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid product ID", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Storage fault", body = MessageResponse)
    )
)]
#[instrument(name = "handler::get_product", skip(state))]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    let product = state.store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier (UUID)")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid product ID, malformed body or validation failure", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Storage fault", body = MessageResponse)
    )
)]
#[instrument(name = "handler::update_product", skip(state, body))]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = product_id(id)?;
    let Json(payload) = body?;
    let patch = validate_patch(&payload)?;
    let product = state
        .store
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(product_id = %product.id, "Product updated");

    Ok(Json(ProductResponse {
        message: UPDATED_MESSAGE.to_string(),
        product,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(
        ("id" = String, Path, description = "Product identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid product ID", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 500, description = "Storage fault", body = MessageResponse)
    )
)]
#[instrument(name = "handler::delete_product", skip(state))]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = product_id(id)?;
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(product_id = %id, "Product deleted");
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
