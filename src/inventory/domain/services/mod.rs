pub mod inventory_command_service;
pub mod inventory_query_service;
pub mod tenant_validation_service;
