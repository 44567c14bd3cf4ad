use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use service::{file::attachments::AttachmentStore, PetCatalog};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{observability, openapi::ApiDoc};

pub mod pets;

/// Shared handler state: the pet catalog and the upload sink.
#[derive(Clone)]
pub struct ServerState {
    pub pets: Arc<dyn PetCatalog>,
    pub attachments: Arc<AttachmentStore>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn metrics() -> (StatusCode, String) {
    observability::gather_metrics()
}

/// Build the full application router: pet routes plus health, docs and metrics.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let pet_routes = Router::new()
        .route("/pet", post(pets::add_pet).put(pets::update_pet))
        .route("/pet/findByStatus", get(pets::find_pets_by_status))
        .route("/pet/findByTags", get(pets::find_pets_by_tags))
        .route(
            "/pet/:pet_id",
            get(pets::get_pet_by_id)
                .post(pets::update_pet_with_form)
                .delete(pets::delete_pet),
        )
        .route("/pet/:pet_id/uploadImage", post(pets::upload_file));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/metrics", get(metrics));

    pet_routes
        .merge(ops)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
