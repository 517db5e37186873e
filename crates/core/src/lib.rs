//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, clamp_quality, is_within_band};
