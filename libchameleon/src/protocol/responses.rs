// chameleon-rs/libchameleon/src/protocol/responses.rs
//! Decoders for reply payloads whose layout the host interprets.

use crate::constants::{EM410X_ID_LEN, MF1_BLOCK_LEN};
use crate::protocol::parser::{be_u32_at, byte_at, ensure_exact_len, le_uint};
use crate::types::{BlockData, DeviceMode, Em410xId};
use crate::Result;

/// Application firmware version, little-endian.
pub fn decode_app_version(data: &[u8]) -> Result<u32> {
    le_uint(data)
}

/// Chip id as lowercase hex, byte order as received.
pub fn decode_chip_id(data: &[u8]) -> String {
    crate::utils::bytes_to_hex(data)
}

/// BLE address as lowercase hex; the device sends it LSB first.
pub fn decode_device_address(data: &[u8]) -> String {
    crate::utils::bytes_to_hex_reversed(data)
}

/// Device mode from the first payload byte: 1 = reader, anything else = tag.
pub fn decode_device_mode(data: &[u8]) -> Result<DeviceMode> {
    Ok(if byte_at(data, 0)? == 1 {
        DeviceMode::Reader
    } else {
        DeviceMode::Tag
    })
}

pub fn decode_block(data: &[u8]) -> Result<BlockData> {
    ensure_exact_len(data, MF1_BLOCK_LEN)?;
    BlockData::try_from(data)
}

pub fn decode_em410x_id(data: &[u8]) -> Result<Em410xId> {
    ensure_exact_len(data, EM410X_ID_LEN)?;
    Em410xId::try_from(data)
}

/// Slot nickname; invalid UTF-8 is replaced rather than rejected.
pub fn decode_nick_name(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// Number of records in the detection log, big-endian like the log index.
pub fn decode_detection_count(data: &[u8]) -> Result<u32> {
    ensure_exact_len(data, 4)?;
    be_u32_at(data, 0)
}
