//! Todo Server Library
//!
//! A minimal HTTP CRUD service for todo items. Requests are routed by axum,
//! and each handler issues one parameterized statement against a sqlx pool
//! owned by a [`db::ConnectionManager`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod transport;

pub use config::Config;
pub use db::ConnectionManager;
pub use error::{DbError, DbResult};
