//! Timeout helpers used across the crate.
//!
//! Centralizes the default exchange timeout and the per-command timeouts of
//! long-running device-side operations.

use std::time::Duration;

/// Default timeout for an ordinary command exchange, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Darkside support detection runs several auth rounds on the device.
pub const DARKSIDE_DETECT_TIMEOUT_MS: u64 = 20_000;

/// How often background readers wake up to check for shutdown.
pub const READ_POLL_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default exchange timeout as Duration.
pub fn default_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}

/// Darkside acquisition keeps the device busy for roughly `sync_max`
/// seconds; give it five more for the reply.
pub fn darkside_acquire_timeout(sync_max: u8) -> Duration {
    Duration::from_secs(u64::from(sync_max) + 5)
}
