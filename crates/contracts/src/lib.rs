//! Wire contracts shared between the KamuSewa frontend and its REST backend.
//!
//! Everything here is plain data plus pure domain rules, so it compiles and
//! tests natively without a browser.

pub mod domain;
pub mod shared;
pub mod system;
