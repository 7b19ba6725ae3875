//! Todo item models and HTTP payload shapes.

use serde::{Deserialize, Serialize};

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    /// Database-generated identifier
    pub id: i64,
    pub content: String,
}

/// Query string carrying the item content for create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentParams {
    pub content: String,
}

/// Success body: `{"status": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn created() -> Self {
        Self::new("Item created")
    }

    pub fn updated() -> Self {
        Self::new("Item updated")
    }

    pub fn deleted() -> Self {
        Self::new("Item deleted")
    }
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
