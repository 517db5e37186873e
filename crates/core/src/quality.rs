//! Quality bounds shared by every mutable item category.

/// Lowest quality a mutable item can hold.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a mutable item can hold.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items. Exempt from the `MIN..=MAX` band.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Clamp a computed quality into `MIN_QUALITY..=MAX_QUALITY`.
pub const fn clamp_quality(quality: i32) -> i32 {
    if quality < MIN_QUALITY {
        MIN_QUALITY
    } else if quality > MAX_QUALITY {
        MAX_QUALITY
    } else {
        quality
    }
}

/// Whether `quality` lies inside the band mutable items must respect.
pub const fn is_within_band(quality: i32) -> bool {
    quality >= MIN_QUALITY && quality <= MAX_QUALITY
}
