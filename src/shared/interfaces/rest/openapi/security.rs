use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

pub struct TenantHeaderSecurityAddon;

impl Modify for TenantHeaderSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "tenantHeader",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-tenant-id"))),
            );
        }
    }
}
