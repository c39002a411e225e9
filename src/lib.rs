pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod resource;
pub mod source;
pub mod templates_structs;
