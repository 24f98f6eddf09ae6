pub mod restock_requested_event;
