//! Transport layer for the todo server.
//!
//! Only HTTP is served; the router is exposed separately so tests can drive it
//! without binding a socket.

pub mod http;

pub use http::{HttpTransport, router};
