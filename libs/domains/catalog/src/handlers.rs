use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreateItem, ItemDto, UpdateItem};
use crate::publisher::EventPublisher;
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(ItemDto, CreateItem, UpdateItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Catalog item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R, P>(service: ItemService<R, P>) -> Router
where
    R: ItemRepository + 'static,
    P: EventPublisher + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "List of items", body = Vec<ItemDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository, P: EventPublisher>(
    State(service): State<Arc<ItemService<R, P>>>,
) -> CatalogResult<Json<Vec<ItemDto>>> {
    let items = service.list_items().await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// Create a new item
///
/// Publishes `catalog-item.created` after the item has been persisted.
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = ItemDto,
            headers(("Location" = String, description = "URL of the created item"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository, P: EventPublisher>(
    State(service): State<Arc<ItemService<R, P>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> CatalogResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    let location = format!("/items/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemDto::from(item)),
    ))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository, P: EventPublisher>(
    State(service): State<Arc<ItemService<R, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<ItemDto>> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemDto::from(item)))
}

/// Update an item
///
/// Overwrites name, description and price; publishes
/// `catalog-item.updated` after the write.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 204, description = "Item updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository, P: EventPublisher>(
    State(service): State<Arc<ItemService<R, P>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> CatalogResult<impl IntoResponse> {
    service.update_item(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item
///
/// Publishes `catalog-item.deleted` after the item has been removed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository, P: EventPublisher>(
    State(service): State<Arc<ItemService<R, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
