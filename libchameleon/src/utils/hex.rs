//! Hexadecimal helpers used for device identifiers and frame tracing.

/// Lowercase hex without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Lowercase hex of the bytes in reverse order. The device reports its
/// BLE address least-significant byte first.
///
/// Example: `&[0x01, 0x02, 0x03]` -> `"030201"`
pub fn bytes_to_hex_reversed(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

/// Lowercase hex with a single space between bytes, for log output.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> crate::Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&cleaned)
        .map_err(|e| crate::Error::InvalidArgument(format!("invalid hex '{}': {}", s, e)))
}
