//! Per-category aging rules.
//!
//! Each rule is a pure function from today's state to tomorrow's. A rule reads
//! `sell_in` before decrementing it, picks a single quality delta, applies it
//! once and clamps once.

use gildedrose_core::{MIN_QUALITY, clamp_quality};

use crate::category::Category;

/// Daily quality change before the sell date (lost by normal items, gained by Aged Brie).
pub const BASE_RATE: i32 = 1;

/// Rate multiplier once the sell date has passed.
pub const EXPIRED_MULTIPLIER: i32 = 2;

/// Rate multiplier for conjured items relative to normal ones.
pub const CONJURED_MULTIPLIER: i32 = 2;

/// The two fields aging touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgingState {
    pub sell_in: i32,
    pub quality: i32,
}

/// Pure transition for one category over one day.
pub type AgingRule = fn(AgingState) -> AgingState;

impl AgingState {
    pub fn new(sell_in: i32, quality: i32) -> Self {
        Self { sell_in, quality }
    }

    /// Whether the sell date has been reached (checked before the step's decrement).
    pub fn is_past_sell_date(self) -> bool {
        self.sell_in <= 0
    }

    /// Advance one day under `category`'s rule.
    pub fn aged(self, category: Category) -> Self {
        (category.rule())(self)
    }

    fn step(self, delta: i32) -> Self {
        Self {
            sell_in: self.sell_in.saturating_sub(1),
            quality: clamp_quality(self.quality.saturating_add(delta)),
        }
    }

    fn expiry_multiplier(self) -> i32 {
        if self.is_past_sell_date() {
            EXPIRED_MULTIPLIER
        } else {
            1
        }
    }
}

impl Category {
    /// Rule table: one pure function per category.
    pub const fn rule(self) -> AgingRule {
        match self {
            Category::Legendary => age_legendary,
            Category::AgedBrie => age_aged_brie,
            Category::BackstagePass => age_backstage_pass,
            Category::Conjured => age_conjured,
            Category::Normal => age_normal,
        }
    }
}

fn age_legendary(state: AgingState) -> AgingState {
    state
}

fn age_normal(state: AgingState) -> AgingState {
    state.step(-BASE_RATE * state.expiry_multiplier())
}

fn age_conjured(state: AgingState) -> AgingState {
    state.step(-BASE_RATE * CONJURED_MULTIPLIER * state.expiry_multiplier())
}

fn age_aged_brie(state: AgingState) -> AgingState {
    state.step(BASE_RATE * state.expiry_multiplier())
}

fn age_backstage_pass(state: AgingState) -> AgingState {
    let delta = match state.sell_in {
        s if s > 10 => 1,
        6..=10 => 2,
        1..=5 => 3,
        // Concert is over.
        _ => {
            return AgingState {
                sell_in: state.sell_in.saturating_sub(1),
                quality: MIN_QUALITY,
            };
        }
    };
    state.step(delta)
}
