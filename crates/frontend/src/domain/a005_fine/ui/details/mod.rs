//! Fine form dialog
//!
//! - model.rs: save and rental options
//! - view_model.rs: form state and the save command
//! - view.rs: dialog consumer

mod model;
mod view;
mod view_model;

pub use view::FineFormDialog;
pub use view_model::{FineFields, FineFormViewModel};
