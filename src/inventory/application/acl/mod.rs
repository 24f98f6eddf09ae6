pub mod tenant_validation_service_impl;
