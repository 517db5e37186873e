//! Inventory aging domain module.
//!
//! This crate contains the aging rules for stocked items, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod engine;
pub mod item;
pub mod rules;

pub use category::Category;
pub use engine::{Inventory, advance_one_day};
pub use item::Item;
pub use rules::{AgingRule, AgingState};
