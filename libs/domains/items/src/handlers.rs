use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    ApiKey, JsonBody, ObjectIdPath,
    errors::responses::{
        BadRequestInvalidIdResponse, BadRequestMissingFieldsResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    API_KEY_HEADER, require_api_key,
};
use database::mongodb::document_to_json;
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey as ApiKeyScheme, ApiKeyValue, SecurityScheme},
};

use crate::error::ItemResult;
use crate::models::{CreateItem, CreatedResponse, Item, ItemFields, MessageResponse};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        replace_item,
        patch_item,
        delete_item,
    ),
    components(
        schemas(Item, CreateItem, CreatedResponse, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestInvalidIdResponse,
            BadRequestMissingFieldsResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&ApiKeySecurity),
    tags(
        (name = "Items", description = "Item endpoints; writes require x-api-key when configured")
    )
)]
pub struct ApiDoc;

/// Registers the `api_key` header scheme referenced by the write routes.
struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKeyScheme::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

/// Create the items router.
///
/// Reads are always public. With `Some(key)` every write route sits behind
/// [`require_api_key`]; with `None` writes are open.
pub fn router<R: ItemRepository + 'static>(
    service: ItemService<R>,
    api_key: Option<ApiKey>,
) -> Router {
    let shared_service = Arc::new(service);

    let reads = Router::new()
        .route("/", get(list_items::<R>))
        .route("/{id}", get(get_item::<R>));

    let mut writes = Router::new()
        .route("/", post(create_item::<R>))
        .route(
            "/{id}",
            put(replace_item::<R>)
                .patch(patch_item::<R>)
                .delete(delete_item::<R>),
        );

    if let Some(key) = api_key {
        writes = writes.route_layer(middleware::from_fn_with_state(key, require_api_key));
    }

    reads.merge(writes).with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "Every item", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Value>>> {
    let items = service
        .list_items()
        .await?
        .into_iter()
        .map(document_to_json)
        .collect();
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    security(("api_key" = [])),
    responses(
        (status = 201, description = "Item created", body = CreatedResponse),
        (status = 400, response = BadRequestMissingFieldsResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> ItemResult<impl IntoResponse> {
    let id = service.create_item(ItemFields::from(body)).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_hex() })))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ItemResult<Json<Value>> {
    let item = service.get_item(id).await?;
    Ok(Json(document_to_json(item)))
}

/// Update an item; `name` and `price` are required
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex chars)")
    ),
    request_body = CreateItem,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Item updated", body = MessageResponse),
        (status = 400, response = BadRequestMissingFieldsResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> ItemResult<Json<MessageResponse>> {
    service.replace_item(id, ItemFields::from(body)).await?;
    Ok(Json(MessageResponse::new("Updated")))
}

/// Merge any subset of fields into an item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex chars)")
    ),
    request_body(content = Object, description = "Top-level fields to set"),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Item updated", body = MessageResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> ItemResult<Json<MessageResponse>> {
    service.patch_item(id, ItemFields::from(body)).await?;
    Ok(Json(MessageResponse::new("Updated")))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex chars)")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ItemResult<Json<MessageResponse>> {
    service.delete_item(id).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
