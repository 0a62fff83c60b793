pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod responder;
pub mod routes;
pub mod state;
pub mod stores;
