// chameleon-rs/libchameleon/src/prelude.rs

pub use crate::cmd::{ChameleonCmd, PositiveCmd};
pub use crate::device::{Device, DeviceBuilder};
pub use crate::protocol::{Command, CommandId, Frame, StatusCode};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::{
    BlockAuth, BlockData, DeviceMode, Em410xId, Error, KeyType, MfKey, NtLevel, Result, SenseType,
    SlotIndex, TagType,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_timeout, ms, parse_hex};
