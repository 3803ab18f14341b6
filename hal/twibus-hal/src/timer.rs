//! Monotonic time source
//!
//! The tick counter is 32 bits wide and wraps. Ordering between two tick
//! values is only meaningful while they are less than half the counter range
//! apart, which is what [`is_before`] assumes.

/// Monotonic tick counter provided by the scheduler
pub trait Clock {
    /// Current tick count
    fn now(&self) -> u32;

    /// Convert a duration in microseconds to ticks
    fn ticks_from_us(&self, us: u32) -> u32;
}

/// Return true if tick `a` is strictly before tick `b`
///
/// Safe across counter wraparound.
#[inline]
pub const fn is_before(a: u32, b: u32) -> bool {
    (a.wrapping_sub(b) as i32) < 0
}
