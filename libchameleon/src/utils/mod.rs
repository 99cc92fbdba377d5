//! Small helpers shared across the crate: hex rendering for identifiers and
//! log output, and the timeout defaults.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use timeout::*;
