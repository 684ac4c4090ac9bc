//! Item form dialog
//!
//! MVVM pattern:
//! - model.rs: API functions (save, category options)
//! - view_model.rs: form state and the save command
//! - view.rs: dialog consumer mounted by the dialog outlet

mod model;
mod view;
mod view_model;

pub use view::ItemFormDialog;
pub use view_model::{ItemFields, ItemFormViewModel};
