// chameleon-rs/libchameleon/src/protocol/commands/device.rs

use crate::types::DeviceMode;

/// Encode ChangeMode payload (command 1001): mode(1)
pub fn encode_change_mode(mode: DeviceMode) -> Vec<u8> {
    vec![mode.as_u8()]
}
