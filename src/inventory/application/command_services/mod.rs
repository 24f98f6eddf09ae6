pub mod inventory_command_service_impl;
