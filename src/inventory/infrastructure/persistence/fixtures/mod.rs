pub mod inventory_fixture;
