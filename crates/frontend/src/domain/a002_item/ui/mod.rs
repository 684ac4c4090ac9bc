pub mod detail_view;
pub mod details;
pub mod list;
