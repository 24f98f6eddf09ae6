use stockwise_api::inventory::domain::{
    model::enums::inventory_domain_error::InventoryDomainError,
    services::tenant_validation_service::TenantValidationService,
};

use crate::support::{
    create_harness,
    fixtures::{TENANT_B, UNKNOWN_TENANT},
};

#[tokio::test]
async fn validate_accepts_known_tenant() {
    let harness = create_harness();

    let tenant_id = harness
        .tenant_validation_service
        .validate(Some(TENANT_B))
        .await
        .expect("LojaB is a known tenant");

    assert_eq!(tenant_id.value(), TENANT_B);
}

#[tokio::test]
async fn validate_trims_surrounding_whitespace() {
    let harness = create_harness();

    let tenant_id = harness
        .tenant_validation_service
        .validate(Some("  LojaB "))
        .await
        .expect("trimmed value is known");

    assert_eq!(tenant_id.value(), TENANT_B);
}

#[tokio::test]
async fn validate_rejects_missing_token_as_unauthenticated() {
    let harness = create_harness();

    let missing = harness.tenant_validation_service.validate(None).await;
    let blank = harness.tenant_validation_service.validate(Some("   ")).await;

    assert!(matches!(missing, Err(InventoryDomainError::MissingTenantId)));
    assert!(matches!(blank, Err(InventoryDomainError::MissingTenantId)));
}

#[tokio::test]
async fn validate_rejects_unknown_tenant_as_forbidden() {
    let harness = create_harness();

    let result = harness
        .tenant_validation_service
        .validate(Some(UNKNOWN_TENANT))
        .await;

    assert!(matches!(
        result,
        Err(InventoryDomainError::TenantNotAuthorized(tenant)) if tenant == UNKNOWN_TENANT
    ));
}

#[tokio::test]
async fn validate_is_case_sensitive() {
    let harness = create_harness();

    let result = harness.tenant_validation_service.validate(Some("lojab")).await;

    assert!(matches!(
        result,
        Err(InventoryDomainError::TenantNotAuthorized(_))
    ));
}
