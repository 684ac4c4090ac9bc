//! REST client for the KamuSewa backend.
//!
//! - request.rs: one authenticated JSON request (token, timeout, 401 handling, envelope)
//! - resource.rs: typed CRUD client per collection

pub mod request;
pub mod resource;

pub use request::{api_request, api_request_empty, Method};
