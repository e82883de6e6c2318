pub mod auth;
pub mod config;
pub mod dates;
pub mod domain;
pub mod filters;
pub mod forms;
pub mod models;
pub mod overlap;
pub mod pagination;
pub mod repository;
pub mod roles;
pub mod routes;
pub mod schema;
pub mod services;
pub mod settings;
