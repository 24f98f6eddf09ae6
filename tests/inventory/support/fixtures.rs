use stockwise_api::inventory::{
    domain::model::value_objects::tenant_id::TenantId,
    infrastructure::persistence::fixtures::inventory_fixture::InventoryFixture,
};

pub const TENANT_A: &str = "LojaA";
pub const TENANT_B: &str = "LojaB";
pub const TENANT_C: &str = "LojaC";
pub const UNKNOWN_TENANT: &str = "TenantInvalido";

pub fn sample_fixture() -> InventoryFixture {
    InventoryFixture::embedded().expect("embedded fixture is valid")
}

pub fn tenant(value: &str) -> TenantId {
    TenantId::new(value.to_string()).expect("valid tenant id")
}
