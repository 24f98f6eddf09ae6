pub mod request_restock_command;
