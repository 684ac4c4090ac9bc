//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod validation;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use validation::{require_email, require_non_blank};
