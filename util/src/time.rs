//! General time utility functions

use chrono;

/// Number of nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Number of milliseconds in a second
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Convert a duration into a number of seconds, or `None` if overflow
pub fn duration_to_seconds(duration: chrono::Duration) -> Option<f64> {
    duration.num_nanoseconds().map(|ns| ns as f64 / NANOS_PER_SECOND as f64)
}

/// Convert a number of seconds into a millisecond tick for the u32 monotonic clock.
///
/// The tick wraps around once it overflows a u32, consumers must use wrapping arithmetic.
pub fn seconds_to_ms_tick(seconds: f64) -> u32 {
    ((seconds * MILLIS_PER_SECOND) as u64 & u32::MAX as u64) as u32
}
