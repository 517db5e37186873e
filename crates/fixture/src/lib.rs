//! `gildedrose-fixture`
//!
//! Text fixture for the aging engine: builds a stock (built-in or from a JSON
//! file), prints it and ages it once per printed day. The day loop lives here,
//! in the caller, not in the engine.

pub mod config;
pub mod report;
pub mod source;

pub use config::FixtureConfig;
pub use report::render_days;
pub use source::{ItemRecord, LoadError, load_inventory, parse_inventory, standard_inventory};
