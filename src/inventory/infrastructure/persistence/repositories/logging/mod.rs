pub mod tracing_restock_audit_log_repository_impl;
