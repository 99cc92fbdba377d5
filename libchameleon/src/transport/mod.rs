// chameleon-rs/libchameleon/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::{MockLink, MockTransport};
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::{Transport, TransportRead};
