// chameleon-rs/libchameleon/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Little-endian unsigned integer of 1 to 4 bytes.
pub fn le_uint(data: &[u8]) -> Result<u32> {
    if data.is_empty() || data.len() > 4 {
        return Err(Error::InvalidLength {
            expected: 4,
            actual: data.len(),
        });
    }
    let mut arr = [0u8; 4];
    arr[..data.len()].copy_from_slice(data);
    Ok(u32::from_le_bytes(arr))
}

/// Big-endian u32 at `idx`, with bounds checking.
pub fn be_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 4)?;
    Ok(u32::from_be_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}
