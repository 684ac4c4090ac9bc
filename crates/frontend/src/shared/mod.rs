pub mod api;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dialog;
pub mod dialog_frame;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
