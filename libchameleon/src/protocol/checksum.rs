// chameleon-rs/libchameleon/src/protocol/checksum.rs

/// Longitudinal redundancy check used by every checksum byte of a frame.
/// LRC = 0x100 - (sum(bytes) & 0xff)
///
/// A span followed by its LRC always sums to zero, so the LRC of a whole
/// frame prefix equals the LRC of the bytes after the last checksum in it.
pub fn lrc(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// `true` when `bytes` followed by `check` sums to zero.
pub fn lrc_ok(bytes: &[u8], check: u8) -> bool {
    lrc(bytes) == check
}
