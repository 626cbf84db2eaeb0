use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory items and their manufacturers, listed in offset-based pages"
    )
)]
struct AppDoc;

/// Application OpenAPI document: shared components plus every domain API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = AppDoc::openapi();
        doc.merge(domain_inventory::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_includes_inventory_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Inventory API");
        assert!(doc.paths.paths.contains_key("/inventory"));
        assert!(doc.paths.paths.contains_key("/inventory/{id}"));
    }
}
