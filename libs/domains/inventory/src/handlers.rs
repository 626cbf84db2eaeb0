use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{InventoryItem, ListInventoryQuery, Manufacturer};
use crate::repository::InventoryRepository;
use crate::service::InventoryService;

pub const INVENTORY_TAG: &str = "inventory";

/// Total number of stored items, sent with non-empty listings
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(list_inventory, create_inventory_item, get_inventory_item),
    components(
        schemas(InventoryItem, Manufacturer),
        responses(
            BadRequestValidationResponse,
            BadRequestQueryResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = INVENTORY_TAG, description = "Inventory items and their manufacturers")
    )
)]
pub struct ApiDoc;

/// Create the inventory router with all HTTP endpoints
pub fn router<R: InventoryRepository + 'static>(service: InventoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/inventory",
            get(list_inventory).post(create_inventory_item),
        )
        .route("/inventory/{id}", get(get_inventory_item))
        .with_state(shared_service)
}

/// List inventory items ordered by id
///
/// An empty window is answered with 200 and no body.
#[utoipa::path(
    get,
    path = "/inventory",
    tag = INVENTORY_TAG,
    params(ListInventoryQuery),
    responses(
        (status = 200, description = "Window of inventory items; empty body when no items match",
            body = Vec<InventoryItem>,
            headers(("x-total-count" = u64, description = "Total number of stored items"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_inventory<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListInventoryQuery>,
) -> InventoryResult<Response> {
    let page = service.list_items(query).await?;

    if page.is_empty() {
        return Ok(StatusCode::OK.into_response());
    }

    let total = HeaderValue::from(page.total());
    Ok(([(TOTAL_COUNT_HEADER, total)], Json(page.into_items())).into_response())
}

/// Add an inventory item with its manufacturer
#[utoipa::path(
    post,
    path = "/inventory",
    tag = INVENTORY_TAG,
    request_body = InventoryItem,
    responses(
        (status = 201, description = "Item created"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, description = "An item with this id already exists"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_inventory_item<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    ValidatedJson(item): ValidatedJson<InventoryItem>,
) -> InventoryResult<StatusCode> {
    service.create_item(item).await?;
    Ok(StatusCode::CREATED)
}

/// Get an inventory item by ID
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = Uuid, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = InventoryItem),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, description = "No item with this id"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_inventory_item<R: InventoryRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    UuidPath(id): UuidPath,
) -> InventoryResult<Json<InventoryItem>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}
