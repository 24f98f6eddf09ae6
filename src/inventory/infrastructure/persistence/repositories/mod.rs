pub mod in_memory;
pub mod known_tenant_repository;
pub mod logging;
pub mod restock_audit_log_repository;
pub mod stock_record_repository;
