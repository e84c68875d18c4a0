use crate::domain::product::{Product, ProductInput};
use crate::transport::http::handlers::{health, info, products};
use crate::transport::http::types::{
    ApiInfo, AppState, Endpoints, HealthResponse, MessageResponse, ProductResponse,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        info::api_info_handler,
        products::list_products_handler,
        products::create_product_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        ProductInput,
        ProductResponse,
        MessageResponse,
        ApiInfo,
        Endpoints,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// API routes only, bound to `app_state`.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/v1", get(info::api_info_handler))
        .route(
            "/api/v1/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/v1/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}

/// Full application: routes, Swagger UI, CORS and request tracing.
pub fn build_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
