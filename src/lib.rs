//! Stockbook
//!
//! Stockbook is a small, in-memory inventory and sales tracking engine written in Rust.

pub mod catalog;
pub mod chart;
pub mod clock;
pub mod fixtures;
pub mod inventory;
pub mod money;
pub mod notify;
pub mod prelude;
pub mod products;
pub mod records;
pub mod report;
pub mod utils;
