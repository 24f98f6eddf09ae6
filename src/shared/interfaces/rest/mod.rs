pub mod controllers;
pub mod openapi;
pub mod resources;
