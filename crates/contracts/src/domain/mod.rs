pub mod common;

pub mod a001_category;
pub mod a002_item;
pub mod a003_customer;
pub mod a004_rental;
pub mod a005_fine;
