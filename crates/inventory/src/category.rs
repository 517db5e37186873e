//! Item categories and name classification.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

/// Exact name of the legendary item.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Exact name of the item that improves with age.
pub const AGED_BRIE_NAME: &str = "Aged Brie";

/// Name prefix shared by all backstage passes.
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";

/// Name prefix shared by all conjured items.
pub const CONJURED_PREFIX: &str = "Conjured";

/// Closed set of aging categories.
///
/// Assigned once when an [`Item`](crate::Item) is built; aging never looks at
/// the name again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality as it ages.
    AgedBrie,
    /// Gains quality as the concert nears, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as [`Category::Normal`].
    Conjured,
    /// Everything else.
    Normal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Legendary,
        Category::AgedBrie,
        Category::BackstagePass,
        Category::Conjured,
        Category::Normal,
    ];

    /// Derive the category from an item name.
    ///
    /// Unrecognized names fall back to [`Category::Normal`].
    pub fn classify(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            Category::Legendary
        } else if name == AGED_BRIE_NAME {
            Category::AgedBrie
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            Category::BackstagePass
        } else if name.starts_with(CONJURED_PREFIX) {
            Category::Conjured
        } else {
            Category::Normal
        }
    }

    /// Stable kebab-case tag (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgedBrie => "aged-brie",
            Category::BackstagePass => "backstage-pass",
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        }
    }

    /// Legendary items are exempt from aging and from the quality band.
    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown category tag: {s:?}")))
    }
}
