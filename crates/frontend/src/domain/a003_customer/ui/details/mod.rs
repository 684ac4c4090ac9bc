//! Customer form dialog (model / view_model / view)

mod model;
mod view;
mod view_model;

pub use view::CustomerFormDialog;
pub use view_model::{CustomerFields, CustomerFormViewModel};
