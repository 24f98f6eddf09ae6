pub mod in_memory_known_tenant_repository_impl;
pub mod in_memory_stock_record_repository_impl;
