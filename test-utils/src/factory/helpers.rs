//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Lowest value handed out by [`next_snowflake`]. Large enough that parsing as `u32`
/// would fail, so tests catch accidental narrowing.
const SNOWFLAKE_BASE: u64 = 100_000_000_000_000_000;

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets a unique Discord-sized snowflake as it is stored in the database.
pub fn next_snowflake() -> String {
    (SNOWFLAKE_BASE + next_id()).to_string()
}
