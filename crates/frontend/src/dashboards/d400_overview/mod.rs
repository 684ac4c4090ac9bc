//! Dashboard overview: headline counters plus short lists of what needs attention.
//!
//! - api.rs: loads the four backend collections
//! - summary.rs: pure aggregation over the loaded rows
//! - ui/: the page

pub mod api;
pub mod summary;
pub mod ui;
