//! Aging engine: advances a batch of items by one day.

use crate::item::Item;

/// Advance every item in `items` by exactly one day.
///
/// Items are processed independently and in order; an empty slice is a no-op.
/// Callers sharing a collection across threads must serialize calls.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let before = item.state();
        item.age();
        tracing::trace!(
            name = item.name(),
            category = %item.category(),
            sell_in.before = before.sell_in,
            sell_in.after = item.sell_in(),
            quality.before = before.quality,
            quality.after = item.quality(),
            "item aged"
        );
    }
    tracing::debug!(items = items.len(), "advanced inventory by one day");
}

/// Caller-owned collection of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every held item by one day.
    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
