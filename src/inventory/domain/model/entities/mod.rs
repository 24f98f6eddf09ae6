pub mod inventory_item;
pub mod restock_acknowledgment;
pub mod stock_record;
