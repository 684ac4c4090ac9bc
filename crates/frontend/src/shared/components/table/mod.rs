pub mod number_format;

pub use number_format::{format_rupiah, format_thousands, parse_rupiah};
