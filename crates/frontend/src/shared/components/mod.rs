pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod table;

pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::{StatCard, StatTone};
pub use status_badge::StatusBadge;
