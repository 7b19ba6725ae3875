//! Data models for the todo server.
//!
//! This module re-exports all model types used throughout the application.

pub mod connection;
pub mod todo;

// Re-export commonly used types
pub use connection::DatabaseType;
pub use todo::{ContentParams, ErrorDetail, StatusResponse, Todo};
