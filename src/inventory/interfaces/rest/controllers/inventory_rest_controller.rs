use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use validator::Validate;

use crate::inventory::{
    domain::{
        model::{
            commands::request_restock_command::RequestRestockCommand,
            entities::inventory_item::InventoryItem,
            enums::inventory_domain_error::InventoryDomainError,
            queries::{
                get_inventory_item_query::GetInventoryItemQuery,
                list_inventory_query::ListInventoryQuery,
                list_low_stock_query::ListLowStockQuery,
            },
            value_objects::tenant_id::TenantId,
        },
        services::{
            inventory_command_service::InventoryCommandService,
            inventory_query_service::InventoryQueryService,
            tenant_validation_service::TenantValidationService,
        },
    },
    interfaces::rest::resources::{
        inventory_error_response_resource::InventoryErrorResponseResource,
        inventory_item_resource::InventoryItemResource,
        restock_acknowledgment_resource::RestockAcknowledgmentResource,
        restock_request_resource::RestockRequestResource,
    },
};

pub const TENANT_HEADER: &str = "x-tenant-id";

type ErrorResponse = (StatusCode, Json<InventoryErrorResponseResource>);

#[derive(Clone)]
pub struct InventoryRestControllerState {
    pub tenant_validation_service: Arc<dyn TenantValidationService>,
    pub query_service: Arc<dyn InventoryQueryService>,
    pub command_service: Arc<dyn InventoryCommandService>,
}

pub fn router(state: InventoryRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/inventory", get(list_inventory))
        .route(
            "/api/v1/inventory/alerts/low-stock",
            get(list_low_stock_alerts),
        )
        .route("/api/v1/inventory/restock", post(request_restock))
        .route("/api/v1/inventory/:product_name", get(get_inventory_item))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/{product_name}",
    tag = "inventory",
    params(
        ("product_name" = String, Path, description = "Product name within the tenant inventory"),
        ("x-tenant-id" = String, Header, description = "Tenant identifier")
    ),
    security(
        ("tenantHeader" = [])
    ),
    responses(
        (status = 200, description = "Stock level of the product", body = InventoryItemResource),
        (status = 401, description = "Tenant header missing", body = InventoryErrorResponseResource),
        (status = 403, description = "Tenant not authorized", body = InventoryErrorResponseResource),
        (status = 404, description = "Product not found for tenant", body = InventoryErrorResponseResource)
    )
)]
pub async fn get_inventory_item(
    State(state): State<InventoryRestControllerState>,
    Path(product_name): Path<String>,
    headers: HeaderMap,
) -> Result<Json<InventoryItemResource>, ErrorResponse> {
    let tenant_id = authorize_tenant(&state, &headers).await?;
    // A blank name can never be a key of the partition.
    let query = GetInventoryItemQuery::new(tenant_id, product_name.clone()).map_err(|_| {
        map_domain_error(InventoryDomainError::ProductNotFound(product_name))
    })?;

    let item = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(inventory_item_resource(item)))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    tag = "inventory",
    params(("x-tenant-id" = String, Header, description = "Tenant identifier")),
    security(
        ("tenantHeader" = [])
    ),
    responses(
        (status = 200, description = "Full tenant inventory", body = [InventoryItemResource]),
        (status = 401, description = "Tenant header missing", body = InventoryErrorResponseResource),
        (status = 403, description = "Tenant not authorized", body = InventoryErrorResponseResource)
    )
)]
pub async fn list_inventory(
    State(state): State<InventoryRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<InventoryItemResource>>, ErrorResponse> {
    let tenant_id = authorize_tenant(&state, &headers).await?;

    let items = state
        .query_service
        .handle_list(ListInventoryQuery::new(tenant_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        items.into_iter().map(inventory_item_resource).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/inventory/alerts/low-stock",
    tag = "inventory",
    params(("x-tenant-id" = String, Header, description = "Tenant identifier")),
    security(
        ("tenantHeader" = [])
    ),
    responses(
        (status = 200, description = "Products below their minimum stock", body = [InventoryItemResource]),
        (status = 401, description = "Tenant header missing", body = InventoryErrorResponseResource),
        (status = 403, description = "Tenant not authorized", body = InventoryErrorResponseResource)
    )
)]
pub async fn list_low_stock_alerts(
    State(state): State<InventoryRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<InventoryItemResource>>, ErrorResponse> {
    let tenant_id = authorize_tenant(&state, &headers).await?;

    let items = state
        .query_service
        .handle_list_low_stock(ListLowStockQuery::new(tenant_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        items.into_iter().map(inventory_item_resource).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/restock",
    tag = "inventory",
    params(("x-tenant-id" = String, Header, description = "Tenant identifier")),
    security(
        ("tenantHeader" = [])
    ),
    request_body = RestockRequestResource,
    responses(
        (status = 201, description = "Restock request acknowledged", body = RestockAcknowledgmentResource),
        (status = 401, description = "Tenant header missing", body = InventoryErrorResponseResource),
        (status = 403, description = "Tenant not authorized", body = InventoryErrorResponseResource),
        (status = 422, description = "Invalid restock payload", body = InventoryErrorResponseResource)
    )
)]
pub async fn request_restock(
    State(state): State<InventoryRestControllerState>,
    headers: HeaderMap,
    payload: Result<Json<RestockRequestResource>, JsonRejection>,
) -> Result<(StatusCode, Json<RestockAcknowledgmentResource>), ErrorResponse> {
    let tenant_id = authorize_tenant(&state, &headers).await?;

    let Json(request) = payload.map_err(|rejection| {
        map_domain_error(InventoryDomainError::InvalidPayload(rejection.body_text()))
    })?;

    if let Err(validation_error) = request.validate() {
        return Err(map_domain_error(InventoryDomainError::InvalidPayload(
            validation_error.to_string(),
        )));
    }

    let command = RequestRestockCommand::new(tenant_id, request.product_name, request.quantity)
        .map_err(map_domain_error)?;

    let acknowledgment = state
        .command_service
        .handle_request_restock(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(RestockAcknowledgmentResource {
            status: acknowledgment.status().as_str().to_string(),
            message: acknowledgment.message().to_string(),
            tenant_id: acknowledgment.tenant_id().value().to_string(),
            product_name: acknowledgment.product_name().value().to_string(),
            quantity_requested: acknowledgment.quantity_requested().value(),
            timestamp: acknowledgment.requested_at(),
        }),
    ))
}

async fn authorize_tenant(
    state: &InventoryRestControllerState,
    headers: &HeaderMap,
) -> Result<TenantId, ErrorResponse> {
    let raw_tenant_id = match headers.get(TENANT_HEADER) {
        Some(value) => Some(value.to_str().map_err(|_| {
            map_domain_error(InventoryDomainError::TenantNotAuthorized(
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            ))
        })?),
        None => None,
    };

    state
        .tenant_validation_service
        .validate(raw_tenant_id)
        .await
        .map_err(map_domain_error)
}

fn inventory_item_resource(item: InventoryItem) -> InventoryItemResource {
    InventoryItemResource {
        tenant_id: item.tenant_id().value().to_string(),
        product_name: item.product_name().value().to_string(),
        quantity: item.quantity(),
        min_stock: item.min_stock(),
        needs_restock: item.needs_restock(),
    }
}

fn map_domain_error(error: InventoryDomainError) -> ErrorResponse {
    let status = match error {
        InventoryDomainError::MissingTenantId => StatusCode::UNAUTHORIZED,
        InventoryDomainError::TenantNotAuthorized(_) => StatusCode::FORBIDDEN,
        InventoryDomainError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        InventoryDomainError::InvalidProductName
        | InventoryDomainError::InvalidRestockQuantity
        | InventoryDomainError::UnknownRestockStatus(_)
        | InventoryDomainError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InventoryDomainError::InvalidStockLevel
        | InventoryDomainError::DuplicateStockRecord(_)
        | InventoryDomainError::DuplicateTenant(_)
        | InventoryDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(InventoryErrorResponseResource {
            message: error.to_string(),
            error_code: error.code().to_string(),
        }),
    )
}
