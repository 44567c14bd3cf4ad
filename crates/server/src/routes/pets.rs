use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Form, Json,
};
use models::{ApiResponse, Pet, PetForm};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::JsonApiError;
use crate::observability;
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsQuery {
    pub tags: Option<String>,
}

#[utoipa::path(
    get, path = "/pet/{petId}", tag = "pet",
    params(("petId" = i64, Path, description = "ID of pet to return")),
    responses(
        (status = 200, description = "successful operation", body = crate::openapi::PetDoc),
        (status = 400, description = "Invalid ID supplied"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_pet_by_id(
    State(state): State<ServerState>,
    Path(pet_id): Path<i64>,
) -> Result<Json<Pet>, JsonApiError> {
    debug!(pet_id, "get_pet_by_id");
    match state.pets.get_by_id(pet_id) {
        Some(pet) => Ok(Json(pet)),
        None => {
            observability::LOOKUPS_MISSED_TOTAL.inc();
            Err(JsonApiError::not_found("Pet not found"))
        }
    }
}

#[utoipa::path(
    delete, path = "/pet/{petId}", tag = "pet",
    params(("petId" = i64, Path, description = "Pet id to delete")),
    responses(
        (status = 200, description = "deleted", body = crate::openapi::ApiResponseDoc),
        (status = 400, description = "Invalid ID supplied"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn delete_pet(
    State(state): State<ServerState>,
    Path(pet_id): Path<i64>,
) -> Result<Json<ApiResponse>, JsonApiError> {
    debug!(pet_id, "delete_pet");
    if state.pets.delete(pet_id) {
        observability::PETS_DELETED_TOTAL.inc();
        Ok(Json(ApiResponse::new(200, pet_id.to_string())))
    } else {
        Err(JsonApiError::not_found("Pet not found"))
    }
}

fn store_pet(state: &ServerState, op: &'static str, body: Option<Json<Pet>>) -> Result<Json<Pet>, JsonApiError> {
    let Some(Json(pet)) = body else {
        warn!(op, "request body missing or unreadable");
        return Err(JsonApiError::invalid_input());
    };
    info!(op, id = pet.id, status = ?pet.status, "storing pet");
    if pet.status.is_some() && pet.known_status().is_none() {
        debug!(op, status = ?pet.status, "status outside available/pending/sold kept as-is");
    }
    let stored = state.pets.add(pet)?;
    observability::PETS_ADDED_TOTAL.inc();
    Ok(Json(stored))
}

#[utoipa::path(
    post, path = "/pet", tag = "pet",
    request_body = crate::openapi::PetDoc,
    responses(
        (status = 200, description = "stored pet", body = crate::openapi::PetDoc),
        (status = 405, description = "Invalid input", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn add_pet(
    State(state): State<ServerState>,
    body: Option<Json<Pet>>,
) -> Result<Json<Pet>, JsonApiError> {
    store_pet(&state, "add_pet", body)
}

#[utoipa::path(
    put, path = "/pet", tag = "pet",
    request_body = crate::openapi::PetDoc,
    responses(
        (status = 200, description = "stored pet", body = crate::openapi::PetDoc),
        (status = 405, description = "Validation exception", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn update_pet(
    State(state): State<ServerState>,
    body: Option<Json<Pet>>,
) -> Result<Json<Pet>, JsonApiError> {
    store_pet(&state, "update_pet", body)
}

#[utoipa::path(
    get, path = "/pet/findByStatus", tag = "pet",
    params(("status" = Option<String>, Query, description = "Comma separated status values: available,pending,sold")),
    responses((status = 200, description = "matching pets", body = [crate::openapi::PetDoc]))
)]
pub async fn find_pets_by_status(
    State(state): State<ServerState>,
    Query(q): Query<StatusQuery>,
) -> Json<Vec<Pet>> {
    let filter = q.status.unwrap_or_default();
    let pets = state.pets.find_by_status(&filter);
    debug!(%filter, count = pets.len(), "find_pets_by_status");
    Json(pets)
}

#[utoipa::path(
    get, path = "/pet/findByTags", tag = "pet",
    params(("tags" = Option<String>, Query, description = "Comma separated tags")),
    responses((status = 200, description = "matching pets", body = [crate::openapi::PetDoc]))
)]
pub async fn find_pets_by_tags(
    State(state): State<ServerState>,
    Query(q): Query<TagsQuery>,
) -> Json<Vec<Pet>> {
    let filter = q.tags.unwrap_or_default();
    let pets = state.pets.find_by_tags(&filter);
    debug!(%filter, count = pets.len(), "find_pets_by_tags");
    Json(pets)
}

#[utoipa::path(
    post, path = "/pet/{petId}", tag = "pet",
    params(("petId" = i64, Path, description = "ID of pet that needs to be updated")),
    request_body(content = crate::openapi::PetFormDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "updated", body = crate::openapi::ApiResponseDoc),
        (status = 404, description = "not found", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn update_pet_with_form(
    State(state): State<ServerState>,
    Path(pet_id): Path<i64>,
    Form(form): Form<PetForm>,
) -> Result<Json<ApiResponse>, JsonApiError> {
    info!(pet_id, name = ?form.name, "update_pet_with_form");
    match state.pets.update_fields(pet_id, form.name.as_deref(), form.status.as_deref()) {
        Some(_) => Ok(Json(ApiResponse::new(200, pet_id.to_string()))),
        None => Err(JsonApiError::not_found("not found")),
    }
}

#[utoipa::path(
    post, path = "/pet/{petId}/uploadImage", tag = "pet",
    params(("petId" = i64, Path, description = "ID of pet to update")),
    request_body(content = crate::openapi::UploadDoc, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "uploaded", body = crate::openapi::ApiResponseDoc),
        (status = 400, description = "missing file part"),
        (status = 500, description = "I/O failure")
    )
)]
pub async fn upload_file(
    State(state): State<ServerState>,
    Path(pet_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse>, JsonApiError> {
    let mut additional_metadata: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    let read_failed = |e: axum::extract::multipart::MultipartError| {
        warn!(pet_id, error = %e, "multipart read failed");
        JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "upload failed")
    };

    while let Some(field) = multipart.next_field().await.map_err(read_failed)? {
        let part = field.name().map(str::to_string);
        match part.as_deref() {
            Some("additionalMetadata") => {
                additional_metadata = Some(field.text().await.map_err(read_failed)?);
            }
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(read_failed)?;
                file = Some((name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    debug!(pet_id, ?additional_metadata, "upload_file");
    let (file_name, bytes) = file.ok_or_else(|| JsonApiError::new(StatusCode::BAD_REQUEST, "file part missing"))?;
    let receipt = state.attachments.save(pet_id, &file_name, &bytes).await?;
    observability::UPLOADS_TOTAL.inc();
    Ok(Json(ApiResponse::new(200, receipt.message(additional_metadata.as_deref()))))
}
