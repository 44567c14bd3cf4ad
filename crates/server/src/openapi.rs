use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: i64, pub name: Option<String> }

/// Status is one of `available`, `pending`, `sold`; other text is stored unchanged.
#[derive(ToSchema)]
pub struct PetDoc {
    pub id: Option<i64>,
    pub category: Option<CategoryDoc>,
    #[schema(example = "doggie")]
    pub name: Option<String>,
    #[schema(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    pub tags: Vec<String>,
    #[schema(example = "available")]
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct PetFormDoc { pub name: Option<String>, pub status: Option<String> }

#[derive(ToSchema)]
pub struct ApiResponseDoc {
    pub code: u16,
    #[schema(rename = "type")]
    pub kind: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct UploadDoc {
    #[schema(rename = "additionalMetadata")]
    pub additional_metadata: Option<String>,
    #[schema(format = Binary)]
    pub file: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pets::get_pet_by_id,
        crate::routes::pets::delete_pet,
        crate::routes::pets::add_pet,
        crate::routes::pets::update_pet,
        crate::routes::pets::find_pets_by_status,
        crate::routes::pets::find_pets_by_tags,
        crate::routes::pets::update_pet_with_form,
        crate::routes::pets::upload_file,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDoc,
            PetDoc,
            PetFormDoc,
            ApiResponseDoc,
            UploadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pet", description = "Everything about your Pets")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_pet_paths() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = json["paths"].as_object().unwrap();
        for p in ["/pet", "/pet/{petId}", "/pet/findByStatus", "/pet/findByTags", "/pet/{petId}/uploadImage"] {
            assert!(paths.contains_key(p), "missing {p}");
        }
    }
}
