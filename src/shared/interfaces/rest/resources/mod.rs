pub mod health_status_resource;
