//! Fixture command line, with environment fallbacks.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DAYS: u32 = 2;

/// Print the stock day by day, aging it once after each day.
///
/// Settings resolve from the command line, then the environment, then defaults.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gildedrose-fixture")]
#[command(version, about, long_about = None)]
pub struct FixtureConfig {
    /// Number of days to print.
    #[arg(env = "GILDEDROSE_DAYS", default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// JSON inventory file; the built-in standard stock is used when absent.
    #[arg(long = "inventory", value_name = "PATH", env = "GILDEDROSE_INVENTORY")]
    pub inventory_path: Option<PathBuf>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory_path: None,
        }
    }
}
