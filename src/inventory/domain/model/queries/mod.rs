pub mod get_inventory_item_query;
pub mod list_inventory_query;
pub mod list_low_stock_query;
