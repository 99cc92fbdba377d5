// chameleon-rs/libchameleon/src/lib.rs

//! libchameleon
//!
//! Host-side command transport for Chameleon-style RFID/NFC emulation
//! devices: checksummed framing over a serial link, request/reply
//! correlation with timeouts, and status classification.
#![warn(missing_docs)]

pub mod cmd;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
