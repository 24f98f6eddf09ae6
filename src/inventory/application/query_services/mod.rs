pub mod inventory_query_service_impl;
