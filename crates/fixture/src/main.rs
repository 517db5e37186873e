use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use gildedrose_fixture::{FixtureConfig, load_inventory, render_days, standard_inventory};
use gildedrose_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = FixtureConfig::parse();

    let items = match &config.inventory_path {
        Some(path) => load_inventory(path)
            .inspect_err(|e| tracing::error!(error = %e, path = %path.display(), "failed to load inventory"))
            .with_context(|| format!("failed to load inventory from {}", path.display()))?,
        None => standard_inventory(),
    };

    let source = config
        .inventory_path
        .as_ref()
        .map_or_else(|| "standard".to_string(), |p| p.display().to_string());
    tracing::info!(days = config.days, source = %source, items = items.len(), "starting fixture");

    let mut inventory = Inventory::new(items);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_days(&mut inventory, config.days, &mut out).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}
