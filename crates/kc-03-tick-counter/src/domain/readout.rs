//! # Readout Formatting

/// Longest possible readout: 20 digits of `u64::MAX` plus the newline.
pub const MAX_READOUT_LEN: usize = 21;

/// Format a tick count the way the readout serves it: decimal, then `\n`.
pub fn format_ticks(ticks: u64) -> String {
    format!("{}\n", ticks)
}
