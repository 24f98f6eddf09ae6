pub mod inventory_error_response_resource;
pub mod inventory_item_resource;
pub mod restock_acknowledgment_resource;
pub mod restock_request_resource;
