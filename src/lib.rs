pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod providers;
pub mod routes;
pub mod utils;
