// chameleon-rs/libchameleon/src/protocol/commands/em410x.rs

use crate::constants::{T55XX_NEW_KEY, T55XX_OLD_KEYS};
use crate::types::Em410xId;

/// Encode WriteEm410xToT5577 payload (command 3001):
/// id(5) new_key(4) old_keys(4 each)
pub fn encode_write_t55xx(id: &Em410xId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + 4 * (1 + T55XX_OLD_KEYS.len()));
    buf.extend_from_slice(id.as_bytes());
    buf.extend_from_slice(&T55XX_NEW_KEY);
    for key in &T55XX_OLD_KEYS {
        buf.extend_from_slice(key);
    }
    buf
}

/// Encode SetEm410xEmuId payload (command 5000): id(5)
pub fn encode_emu_id(id: &Em410xId) -> Vec<u8> {
    id.as_bytes().to_vec()
}
