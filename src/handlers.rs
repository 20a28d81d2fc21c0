use crate::db_storage::PersonStorage;
use crate::enrichment::enrich_person;
use crate::errors::AppError;
use crate::models::{CreatedPerson, EnrichedPerson, Person};
use crate::services::EnrichmentService;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Person repository, shared by every request.
    pub storage: Arc<dyn PersonStorage>,
    /// Client for the age, gender and nationality APIs.
    pub enrichment: EnrichmentService,
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /{id}
///
/// Retrieves a stored person by id.
///
/// # Returns
///
/// * `Result<Json<EnrichedPerson>, AppError>` - The stored record, 400 for a bad id or 404 if absent.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Stored person", body = EnrichedPerson),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No person with this id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<EnrichedPerson>, AppError> {
    let Path(id) = id?;
    tracing::info!("GET /{}", id);

    let person = state.storage.get_by_id(id).await?;
    Ok(Json(person))
}

/// POST /
///
/// Validates the person, enriches it with age, gender and nationality, then stores it.
/// Validation happens before any outbound call or write.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - JSON body with `name`, `surname` and optional `patronymic`.
///
/// # Returns
///
/// * `Result<Json<CreatedPerson>, AppError>` - The id assigned to the new record.
#[utoipa::path(
    post,
    path = "/",
    tag = "people",
    request_body = Person,
    responses(
        (status = 200, description = "Person enriched and stored", body = CreatedPerson),
        (status = 400, description = "Malformed body or missing name/surname"),
        (status = 502, description = "An enrichment API failed"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<Json<CreatedPerson>, AppError> {
    let Json(person) = payload?;
    let person = person.trimmed();
    person.validate()?;
    tracing::info!("POST / - {} {}", person.name, person.surname);

    let enriched = enrich_person(&state.enrichment, person).await?;
    let id = state.storage.create(&enriched).await?;

    Ok(Json(CreatedPerson { id }))
}

/// PUT /{id}
///
/// Replaces every field of a stored person. All fields are required and age must be non-zero.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person identifier")),
    request_body = EnrichedPerson,
    responses(
        (status = 200, description = "Update applied"),
        (status = 400, description = "Malformed identifier or incomplete body"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_person(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EnrichedPerson>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Json(mut person) = payload?;
    person.person = person.person.trimmed();
    person.validate_complete()?;
    tracing::info!("PUT /{}", id);

    let rows = state.storage.update(id, &person).await?;
    if rows == 0 {
        tracing::warn!("Update matched no person with id {}", id);
    }

    Ok(StatusCode::OK)
}

/// DELETE /{id}
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person removed, or already absent"),
        (status = 400, description = "Malformed identifier"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    tracing::info!("DELETE /{}", id);

    let rows = state.storage.delete(id).await?;
    if rows == 0 {
        tracing::warn!("Delete matched no person with id {}", id);
    }

    Ok(StatusCode::OK)
}
