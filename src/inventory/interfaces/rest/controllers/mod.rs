pub mod inventory_rest_controller;
