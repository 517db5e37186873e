//! Where the fixture's items come from.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use gildedrose_core::DomainError;
use gildedrose_inventory::{Category, Item};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read inventory file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory JSON")]
    Parse(#[from] serde_json::Error),

    #[error("item #{index} is invalid")]
    InvalidItem {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// One entry of a JSON inventory file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    /// Explicit category tag; derived from `name` when absent.
    ///
    /// Kept as a string so an unknown tag surfaces as `DomainError::Validation`
    /// for its item instead of a serde error for the whole file.
    #[serde(default)]
    pub category: Option<String>,
}

impl ItemRecord {
    /// Convert into a checked [`Item`].
    pub fn into_item(self) -> Result<Item, DomainError> {
        let item = match self.category.as_deref() {
            Some(tag) => {
                let category: Category = tag.parse()?;
                Item::with_category(self.name, category, self.sell_in, self.quality)
            }
            None => Item::new(self.name, self.sell_in, self.quality),
        };
        item.validate()?;
        Ok(item)
    }
}

/// The standard fixture stock, one or more items per category.
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of [`ItemRecord`]s.
pub fn parse_inventory(json: &str) -> Result<Vec<Item>, LoadError> {
    let records: Vec<ItemRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_item()
                .map_err(|source| LoadError::InvalidItem { index, source })
        })
        .collect()
}

/// Read and parse a JSON inventory file.
pub fn load_inventory(path: &Path) -> Result<Vec<Item>, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_inventory(&json)
}
