use axum::{http::StatusCode, response::IntoResponse};
use utoipa::OpenApi;

use crate::errors::AppError;
use crate::handlers;
use crate::models::{CreatedPerson, EnrichedPerson, Person};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::get_person,
        handlers::create_person,
        handlers::update_person,
        handlers::delete_person
    ),
    components(schemas(Person, EnrichedPerson, CreatedPerson)),
    tags(
        (name = "people", description = "Enriched person records"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(content) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            content,
        )
            .into_response(),
        Err(e) => {
            AppError::InternalError(format!("Failed to render OpenAPI document: {}", e))
                .into_response()
        }
    }
}

/// Serves the Swagger UI HTML page.
///
/// The page loads its assets from a CDN and points them at `serve_openapi_spec`.
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>People Enrichment API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
