// chameleon-rs/libchameleon/src/protocol/commands/mifare.rs

use crate::constants::MF1_BLOCK_LEN;
use crate::types::{BlockAuth, BlockData, KeyType};
use crate::{Error, Result};

/// Encode Mf1DarksideAcquire payload (command 2004):
/// type(1) block(1) first_recover(1) sync_max(1)
pub fn encode_darkside_acquire(
    block: u8,
    key_type: KeyType,
    first_recover: bool,
    sync_max: u8,
) -> Vec<u8> {
    vec![key_type as u8, block, u8::from(first_recover), sync_max]
}

/// Encode the keyed single-block payload shared by commands 2005, 2007 and
/// 2008: type(1) block(1) key(6)
pub fn encode_block_auth(auth: &BlockAuth) -> Vec<u8> {
    auth.encode().to_vec()
}

/// Encode Mf1NestedAcquire payload (command 2006):
/// known type(1) known block(1) known key(6) target type(1) target block(1)
pub fn encode_nested_acquire(known: &BlockAuth, target_block: u8, target_type: KeyType) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    buf.extend_from_slice(&known.encode());
    buf.push(target_type as u8);
    buf.push(target_block);
    buf
}

/// Encode Mf1WriteOneBlock payload (command 2009): type(1) block(1) key(6) data(16)
pub fn encode_write_block(auth: &BlockAuth, data: &BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + MF1_BLOCK_LEN);
    buf.extend_from_slice(&auth.encode());
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// Encode LoadMf1BlockData payload (command 4000): start(1) data(n * 16).
///
/// Blocks are written to the emulator consecutively from `start_block`.
pub fn encode_load_block_data(start_block: u8, data: &[u8]) -> Result<Vec<u8>> {
    check_block_data(data)?;
    Ok(layout_load_block_data(start_block, data))
}

pub(crate) fn check_block_data(data: &[u8]) -> Result<()> {
    if data.is_empty() || data.len() % MF1_BLOCK_LEN != 0 {
        return Err(Error::InvalidArgument(format!(
            "block data must be a non-empty multiple of {} bytes, got {}",
            MF1_BLOCK_LEN,
            data.len()
        )));
    }
    Ok(())
}

/// LoadMf1BlockData layout for data already checked by [`check_block_data`].
pub(crate) fn layout_load_block_data(start_block: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + data.len());
    buf.push(start_block);
    buf.extend_from_slice(data);
    buf
}

/// Encode SetMf1AntiCollisionRes payload (command 4001): sak(1) atqa(2) uid(4|7|10)
pub fn encode_anti_collision(sak: u8, atqa: [u8; 2], uid: &[u8]) -> Result<Vec<u8>> {
    check_uid(uid)?;
    Ok(layout_anti_collision(sak, atqa, uid))
}

pub(crate) fn check_uid(uid: &[u8]) -> Result<()> {
    if !matches!(uid.len(), 4 | 7 | 10) {
        return Err(Error::InvalidArgument(format!(
            "uid must be 4, 7 or 10 bytes, got {}",
            uid.len()
        )));
    }
    Ok(())
}

pub(crate) fn layout_anti_collision(sak: u8, atqa: [u8; 2], uid: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + uid.len());
    buf.push(sak);
    buf.extend_from_slice(&atqa);
    buf.extend_from_slice(uid);
    buf
}

/// Encode SetMf1DetectionEnable payload (command 5003): enable(1)
pub fn encode_detection_enable(enable: bool) -> Vec<u8> {
    vec![u8::from(enable)]
}

/// Encode GetMf1DetectionResult payload (command 5005): index(4, big-endian)
pub fn encode_detection_log(index: u32) -> Vec<u8> {
    index.to_be_bytes().to_vec()
}
