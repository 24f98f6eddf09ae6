pub mod product_name;
pub mod restock_quantity;
pub mod tenant_id;
