//! HTTP route handlers.

pub mod todo;

pub use todo::{create_item, delete_item, list_items, update_item};
