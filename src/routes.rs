use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{self, AppState};
use crate::{obs, openapi};

/// Request bodies are single person records; anything larger is rejected.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the HTTP surface: the four person routes plus health and docs.
pub fn build_router(state: Arc<AppState>) -> Router {
    let people_routes = Router::new()
        .route("/", post(handlers::create_person))
        .route(
            "/:id",
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/docs", get(openapi::serve_swagger_ui))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi_spec))
        .merge(people_routes)
        .with_state(state)
        .layer(middleware::from_fn(obs::request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
