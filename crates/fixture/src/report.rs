//! Day-by-day text report.

use std::io::{self, Write};

use gildedrose_inventory::Inventory;

pub const HEADER: &str = "name, sellIn, quality";

/// Print the inventory for `days` days, aging it once after each day's block.
///
/// Day `d` is printed as a banner, the column header, one line per item and a
/// blank line.
pub fn render_days<W: Write>(inventory: &mut Inventory, days: u32, out: &mut W) -> io::Result<()> {
    for day in 0..days {
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "{HEADER}")?;
        for item in &*inventory {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;
        inventory.advance_one_day();
    }
    Ok(())
}
