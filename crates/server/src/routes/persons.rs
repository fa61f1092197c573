use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{NameUpdate, PersonView};

use crate::errors::ApiError;
use crate::extract::{IdPath, NamePath, ValidJson};
use crate::state::AppState;

/// 200 with the list, or 204 when it is empty.
fn list_or_no_content<T: serde::Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    responses(
        (status = 200, description = "All persons in insertion order", body = [crate::openapi::PersonDoc]),
        (status = 204, description = "No persons stored")
    )
)]
pub async fn list_persons(State(state): State<AppState>) -> Response {
    list_or_no_content(state.persons.get_all().await)
}

#[utoipa::path(
    get,
    path = "/persons/name/{name}",
    tag = "persons",
    params(("name" = String, Path, description = "Exact name, case-insensitive")),
    responses(
        (status = 200, description = "Matching persons", body = [crate::openapi::PersonViewDoc]),
        (status = 204, description = "Nobody matches"),
        (status = 400, description = "Name is not valid UTF-8 once decoded", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn find_persons_by_name(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> Response {
    list_or_no_content(state.persons.find_by_name(&name).await)
}

#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = crate::openapi::PersonViewDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PersonView>, ApiError> {
    Ok(Json(state.persons.find_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    request_body = crate::openapi::PersonViewDoc,
    responses(
        (status = 201, description = "Created; Location points at the new record", body = crate::openapi::PersonViewDoc),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    ValidJson(view): ValidJson<PersonView>,
) -> impl IntoResponse {
    let created = state.persons.create(view).await;
    let location = format!("/persons/{}", created.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(created.view()))
}

#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person id")),
    request_body = crate::openapi::PersonViewDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn replace_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(view): ValidJson<PersonView>,
) -> Result<StatusCode, ApiError> {
    state.persons.replace(id, view).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person id")),
    request_body = crate::openapi::NameUpdateDoc,
    responses(
        (status = 204, description = "Name changed, age untouched"),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn patch_person_name(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(update): ValidJson<NameUpdate>,
) -> Result<StatusCode, ApiError> {
    state.persons.patch_name(id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.persons.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
