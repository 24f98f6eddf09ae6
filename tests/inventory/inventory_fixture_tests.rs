use stockwise_api::inventory::{
    domain::model::enums::inventory_domain_error::InventoryDomainError,
    infrastructure::persistence::fixtures::inventory_fixture::InventoryFixture,
};

use crate::support::{
    fixtures::{TENANT_A, TENANT_B, TENANT_C},
    sample_fixture, tenant,
};

#[test]
fn embedded_fixture_holds_three_tenants_of_five_products() {
    let fixture = sample_fixture();

    assert_eq!(
        fixture.tenant_ids(),
        vec![tenant(TENANT_A), tenant(TENANT_B), tenant(TENANT_C)]
    );

    let partitions = fixture.into_partitions();
    assert!(partitions.values().all(|records| records.len() == 5));
}

#[test]
fn from_json_rejects_negative_stock_levels() {
    let result = InventoryFixture::from_json(
        r#"{ "LojaZ": { "Parafuso": { "quantity": -1, "min_stock": 5 } } }"#,
    );

    assert!(matches!(result, Err(InventoryDomainError::InvalidStockLevel)));
}

#[test]
fn from_json_rejects_blank_product_names() {
    let result =
        InventoryFixture::from_json(r#"{ "LojaZ": { " ": { "quantity": 1, "min_stock": 5 } } }"#);

    assert!(matches!(result, Err(InventoryDomainError::InvalidProductName)));
}

#[test]
fn from_json_rejects_records_missing_a_field() {
    let result = InventoryFixture::from_json(r#"{ "LojaZ": { "Parafuso": { "quantity": 1 } } }"#);

    assert!(matches!(
        result,
        Err(InventoryDomainError::InfrastructureError(_))
    ));
}

#[test]
fn from_json_keeps_tenants_with_empty_partitions() {
    let fixture = InventoryFixture::from_json(r#"{ "LojaVazia": {} }"#).expect("valid fixture");

    assert_eq!(fixture.tenant_ids(), vec![tenant("LojaVazia")]);
}

#[test]
fn from_path_reports_missing_files() {
    let result = InventoryFixture::from_path("/nonexistent/inventory.json");

    assert!(matches!(
        result,
        Err(InventoryDomainError::InfrastructureError(message)) if message.contains("/nonexistent/inventory.json")
    ));
}

#[test]
fn from_json_rejects_tenant_keys_that_trim_to_the_same_id() {
    let result = InventoryFixture::from_json(
        r#"{
            "LojaA": { "Parafuso M8": { "quantity": 15, "min_stock": 50 } },
            " LojaA": { "Parafuso M8": { "quantity": 900, "min_stock": 50 } }
        }"#,
    );

    assert!(matches!(
        result,
        Err(InventoryDomainError::DuplicateTenant(tenant_id)) if tenant_id == TENANT_A
    ));
}
