use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    inventory::{
        application::{
            acl::tenant_validation_service_impl::TenantValidationServiceImpl,
            command_services::inventory_command_service_impl::InventoryCommandServiceImpl,
            query_services::inventory_query_service_impl::InventoryQueryServiceImpl,
        },
        domain::model::value_objects::tenant_id::TenantId,
        infrastructure::persistence::{
            fixtures::inventory_fixture::InventoryFixture,
            repositories::{
                in_memory::{
                    in_memory_known_tenant_repository_impl::InMemoryKnownTenantRepositoryImpl,
                    in_memory_stock_record_repository_impl::InMemoryStockRecordRepositoryImpl,
                },
                logging::tracing_restock_audit_log_repository_impl::TracingRestockAuditLogRepositoryImpl,
            },
        },
        interfaces::rest::controllers::inventory_rest_controller::{
            InventoryRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_inventory_router(config: &AppConfig) -> Result<Router, String> {
    let fixture = match &config.inventory_fixture_path {
        Some(path) => InventoryFixture::from_path(path),
        None => InventoryFixture::embedded(),
    }
    .map_err(|e| e.to_string())?;

    let known_tenants = match &config.known_tenants {
        Some(tenants) => tenants
            .iter()
            .map(|tenant| TenantId::new(tenant.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?,
        None => fixture.tenant_ids(),
    };

    tracing::info!(tenants = known_tenants.len(), "inventory store loaded");

    let stock_record_repository = Arc::new(
        InMemoryStockRecordRepositoryImpl::new(fixture.into_partitions())
            .map_err(|e| e.to_string())?,
    );
    let known_tenant_repository = Arc::new(InMemoryKnownTenantRepositoryImpl::new(known_tenants));
    let audit_log_repository = Arc::new(TracingRestockAuditLogRepositoryImpl::new());

    let tenant_validation_service =
        Arc::new(TenantValidationServiceImpl::new(known_tenant_repository));
    let query_service = Arc::new(InventoryQueryServiceImpl::new(stock_record_repository));
    let command_service = Arc::new(InventoryCommandServiceImpl::new(audit_log_repository));

    Ok(router(InventoryRestControllerState {
        tenant_validation_service,
        query_service,
        command_service,
    }))
}
