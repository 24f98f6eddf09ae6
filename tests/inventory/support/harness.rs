use std::sync::Arc;

use stockwise_api::inventory::{
    application::{
        acl::tenant_validation_service_impl::TenantValidationServiceImpl,
        command_services::inventory_command_service_impl::InventoryCommandServiceImpl,
        query_services::inventory_query_service_impl::InventoryQueryServiceImpl,
    },
    domain::model::value_objects::tenant_id::TenantId,
    infrastructure::persistence::repositories::{
        in_memory::{
            in_memory_known_tenant_repository_impl::InMemoryKnownTenantRepositoryImpl,
            in_memory_stock_record_repository_impl::InMemoryStockRecordRepositoryImpl,
        },
        stock_record_repository::StockRecordRepository,
    },
    interfaces::rest::controllers::inventory_rest_controller::InventoryRestControllerState,
};

use super::{fakes::FakeRestockAuditLogRepository, fixtures::sample_fixture};

pub struct InventoryTestHarness {
    pub audit_repository: Arc<FakeRestockAuditLogRepository>,
    pub tenant_validation_service: Arc<TenantValidationServiceImpl>,
    pub query_service: Arc<InventoryQueryServiceImpl>,
    pub command_service: Arc<InventoryCommandServiceImpl>,
}

impl InventoryTestHarness {
    pub fn state(&self) -> InventoryRestControllerState {
        InventoryRestControllerState {
            tenant_validation_service: self.tenant_validation_service.clone(),
            query_service: self.query_service.clone(),
            command_service: self.command_service.clone(),
        }
    }
}

pub fn create_harness() -> InventoryTestHarness {
    let fixture = sample_fixture();
    let known_tenants = fixture.tenant_ids();
    let stock_record_repository = Arc::new(
        InMemoryStockRecordRepositoryImpl::new(fixture.into_partitions())
            .expect("fixture has unique products"),
    );

    create_harness_with(stock_record_repository, known_tenants, false)
}

pub fn create_harness_with(
    stock_record_repository: Arc<dyn StockRecordRepository>,
    known_tenants: Vec<TenantId>,
    audit_should_fail: bool,
) -> InventoryTestHarness {
    let audit_repository = Arc::new(FakeRestockAuditLogRepository::new(audit_should_fail));
    let known_tenant_repository = Arc::new(InMemoryKnownTenantRepositoryImpl::new(known_tenants));

    InventoryTestHarness {
        audit_repository: audit_repository.clone(),
        tenant_validation_service: Arc::new(TenantValidationServiceImpl::new(
            known_tenant_repository,
        )),
        query_service: Arc::new(InventoryQueryServiceImpl::new(stock_record_repository)),
        command_service: Arc::new(InventoryCommandServiceImpl::new(audit_repository)),
    }
}
