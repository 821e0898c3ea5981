//! Staggered fade-in schedule for result rows.

/// Base fade duration in milliseconds.
pub const FADE_BASE_MS: u64 = 200;

/// Duration increment per pair of children, in milliseconds.
pub const FADE_STEP_MS: u64 = 120;

/// Returns the fade duration for the child at `index` (0-based).
///
/// Durations grow every second child, so later children finish fading
/// slightly after earlier ones while the animations overlap; this is a
/// cosmetic stagger, not a sequence barrier.
pub fn fade_duration(index: usize) -> u64 {
    FADE_BASE_MS + (index as u64 / 2) * FADE_STEP_MS
}

/// Returns `(index, duration)` for each of `len` children.
pub fn fade_schedule(len: usize) -> Vec<(usize, u64)> {
    (0..len).map(|i| (i, fade_duration(i))).collect()
}
