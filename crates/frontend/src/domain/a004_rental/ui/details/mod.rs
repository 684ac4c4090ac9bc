//! Rental form dialog
//!
//! MVVM pattern:
//! - model.rs: API functions (save, customer and item options)
//! - view_model.rs: form state, rental lines, price estimate
//! - view.rs: dialog consumer mounted by the dialog outlet

mod model;
mod view;
mod view_model;

pub use view::RentalFormDialog;
pub use view_model::{LineDraft, RentalFields, RentalFormViewModel};
