//! # Outbound Ports
//!
//! The clock the counter samples.

/// Monotonic tick source - outbound port.
///
/// Implementations must never return a smaller value than a previous call.
pub trait TickSource: Send + Sync {
    /// Current tick count.
    fn now_ticks(&self) -> u64;
}
