pub mod inventory_domain_error;
pub mod restock_status;
