//! Database abstraction layer.
//!
//! This module provides database access functionality:
//! - Connection pool lifecycle management
//! - The todo table statements
//! - Row decoding
//! - Backend dispatch macro

#[macro_use]
pub mod macros;
pub mod pool;
pub mod repository;
pub mod types;

pub use pool::{ConnectionManager, DbPool, ManagerState};
pub use repository::TodoRepository;
