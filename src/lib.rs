pub mod clock;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;
