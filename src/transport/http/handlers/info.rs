use crate::transport::http::types::{ApiInfo, Endpoints};
use axum::Json;

pub const BANNER: &str = "✅ Product CRUD API v1 is up and running!";

#[utoipa::path(
    get,
    path = "/api/v1",
    responses(
        (status = 200, description = "Service banner and available operations", body = ApiInfo)
    )
)]
pub async fn api_info_handler() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: BANNER.to_string(),
        endpoints: Endpoints {
            list: "GET /api/v1/products".to_string(),
            create: "POST /api/v1/products".to_string(),
            get_one: "GET /api/v1/products/:id".to_string(),
            update: "PUT /api/v1/products/:id".to_string(),
            delete: "DELETE /api/v1/products/:id".to_string(),
        },
    })
}
