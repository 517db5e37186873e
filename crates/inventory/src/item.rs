use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, LEGENDARY_QUALITY, is_within_band};

use crate::category::Category;
use crate::rules::AgingState;

/// A stocked item.
///
/// The category is fixed at construction. Aging mutates `sell_in` and
/// `quality` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    category: Category,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Build an item, deriving its category from the name.
    ///
    /// Accepts any values; see [`Item::try_new`] for the checked variant.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self::with_category(name, category, sell_in, quality)
    }

    /// Build an item with an explicit category, bypassing name classification.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i32,
        quality: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            sell_in,
            quality,
        }
    }

    /// Build an item and check it against the quality invariants.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        item.validate()?;
        Ok(item)
    }

    /// Check the item against its category's invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.category.is_legendary() {
            if self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::invariant(format!(
                    "legendary quality must be {LEGENDARY_QUALITY} (got {})",
                    self.quality
                )));
            }
        } else if !is_within_band(self.quality) {
            return Err(DomainError::invariant(format!(
                "quality must be within 0..=50 (got {})",
                self.quality
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn state(&self) -> AgingState {
        AgingState::new(self.sell_in, self.quality)
    }

    /// Advance this item by one day under its category's rule.
    pub fn age(&mut self) {
        let next = self.state().aged(self.category);
        self.sell_in = next.sell_in;
        self.quality = next.quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_classifies_from_name() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.category(), Category::AgedBrie);
        assert_eq!(item.name(), "Aged Brie");
        assert_eq!(item.sell_in(), 2);
        assert_eq!(item.quality(), 0);
    }

    #[test]
    fn with_category_overrides_classification() {
        let item = Item::with_category("Mystery Cheese", Category::AgedBrie, 2, 0);
        assert_eq!(item.category(), Category::AgedBrie);
    }

    #[test]
    fn try_new_accepts_in_band_items() {
        assert!(Item::try_new("+5 Dexterity Vest", 10, 20).is_ok());
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", -1, 80).is_ok());
    }

    #[test]
    fn try_new_rejects_empty_name() {
        let err = Item::try_new("   ", 1, 1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn try_new_rejects_out_of_band_quality() {
        for quality in [-1, 51] {
            let err = Item::try_new("Elixir of the Mongoose", 5, quality).unwrap_err();
            match err {
                DomainError::InvariantViolation(msg) if msg.contains("0..=50") => {}
                _ => panic!("Expected InvariantViolation for quality {quality}"),
            }
        }
    }

    #[test]
    fn try_new_rejects_legendary_with_wrong_quality() {
        let err = Item::try_new("Sulfuras, Hand of Ragnaros", 0, 50).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("legendary") => {}
            _ => panic!("Expected InvariantViolation for legendary quality"),
        }
    }

    #[test]
    fn age_applies_the_category_rule() {
        let mut item = Item::new("Conjured Mana Cake", 3, 6);
        item.age();
        assert_eq!((item.sell_in(), item.quality()), (2, 4));
        assert_eq!(item.name(), "Conjured Mana Cake");
    }

    #[test]
    fn display_matches_fixture_line() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(item.to_string(), "Elixir of the Mongoose, 5, 7");
    }

    #[test]
    fn serializes_with_category_tag() {
        let item = Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["category"], "backstage-pass");
        assert_eq!(value["sell_in"], 15);
        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
