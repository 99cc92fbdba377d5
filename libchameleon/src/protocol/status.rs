// chameleon-rs/libchameleon/src/protocol/status.rs

use derive_more::Display;

use crate::{Error, Result};

/// Subsystem a status code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Subsystem {
    /// ISO14443-A reader results
    Hf,
    /// Darkside / nested acquisition verdicts
    Mifare,
    /// 125 kHz reader results
    Lf,
    /// Device management
    Device,
}

/// Status code carried in every frame.
///
/// Any `u16` is representable; codes outside the catalogue are treated as
/// unknown failures by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCode(u16);

impl StatusCode {
    pub const HF_TAG_OK: Self = Self(0x00);
    pub const HF_TAG_NO: Self = Self(0x01);
    pub const HF_ERRSTAT: Self = Self(0x02);
    pub const HF_ERRCRC: Self = Self(0x03);
    pub const HF_COLLISION: Self = Self(0x04);
    pub const HF_ERRBCC: Self = Self(0x05);
    pub const MF_ERRAUTH: Self = Self(0x06);
    pub const HF_ERRPARITY: Self = Self(0x07);

    pub const DARKSIDE_CANT_FIXED_NT: Self = Self(0x20);
    pub const DARKSIDE_LUCK_AUTH_OK: Self = Self(0x21);
    pub const DARKSIDE_NACK_NO_SEND: Self = Self(0x22);
    pub const DARKSIDE_TAG_CHANGED: Self = Self(0x23);
    pub const NESTED_TAG_IS_STATIC: Self = Self(0x24);
    pub const NESTED_TAG_IS_HARD: Self = Self(0x25);

    pub const LF_TAG_OK: Self = Self(0x40);
    pub const EM410X_TAG_NO_FOUND: Self = Self(0x41);

    pub const STATUS_PAR_ERR: Self = Self(0x60);
    pub const STATUS_DEVICE_MODE_ERROR: Self = Self(0x66);
    pub const STATUS_INVALID_CMD: Self = Self(0x67);
    pub const STATUS_DEVICE_SUCCESS: Self = Self(0x68);
    pub const STATUS_NOT_IMPLEMENTED: Self = Self(0x69);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    fn entry(&self) -> Option<&'static (StatusCode, &'static str, &'static str)> {
        CATALOGUE.iter().find(|(code, _, _)| code == self)
    }

    /// Symbolic name, if catalogued.
    pub fn name(&self) -> Option<&'static str> {
        self.entry().map(|(_, name, _)| *name)
    }

    /// Human-readable message, if catalogued.
    pub fn message(&self) -> Option<&'static str> {
        self.entry().map(|(_, _, msg)| *msg)
    }

    pub fn is_known(&self) -> bool {
        self.entry().is_some()
    }

    /// Subsystem by code range. Unknown codes inside a range still map to it.
    pub fn subsystem(&self) -> Option<Subsystem> {
        match self.0 {
            0x00..=0x1f => Some(Subsystem::Hf),
            0x20..=0x3f => Some(Subsystem::Mifare),
            0x40..=0x5f => Some(Subsystem::Lf),
            0x60..=0x7f => Some(Subsystem::Device),
            _ => None,
        }
    }

    /// Message used in a negative response for this code.
    pub fn describe(&self) -> String {
        match self.message() {
            Some(msg) => msg.to_string(),
            None => unknown_status_message(self.0),
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({:#04x})", name, self.0),
            None => write!(f, "{:#06x}", self.0),
        }
    }
}

/// (code, name, message)
const CATALOGUE: &[(StatusCode, &str, &str)] = &[
    (StatusCode::HF_TAG_OK, "HF_TAG_OK", "HF tag operation succeeded"),
    (StatusCode::HF_TAG_NO, "HF_TAG_NO", "HF tag not found or lost"),
    (StatusCode::HF_ERRSTAT, "HF_ERRSTAT", "HF tag status error"),
    (StatusCode::HF_ERRCRC, "HF_ERRCRC", "HF tag data CRC error"),
    (StatusCode::HF_COLLISION, "HF_COLLISION", "HF tag collision"),
    (StatusCode::HF_ERRBCC, "HF_ERRBCC", "HF tag UID BCC error"),
    (StatusCode::MF_ERRAUTH, "MF_ERRAUTH", "MIFARE key authentication failed"),
    (StatusCode::HF_ERRPARITY, "HF_ERRPARITY", "HF tag data parity error"),
    (
        StatusCode::DARKSIDE_CANT_FIXED_NT,
        "DARKSIDE_CANT_FIXED_NT",
        "darkside: tag nonce cannot be fixed",
    ),
    (
        StatusCode::DARKSIDE_LUCK_AUTH_OK,
        "DARKSIDE_LUCK_AUTH_OK",
        "darkside: key authenticated by luck",
    ),
    (
        StatusCode::DARKSIDE_NACK_NO_SEND,
        "DARKSIDE_NACK_NO_SEND",
        "darkside: tag does not send NACK",
    ),
    (
        StatusCode::DARKSIDE_TAG_CHANGED,
        "DARKSIDE_TAG_CHANGED",
        "darkside: tag changed during acquisition",
    ),
    (
        StatusCode::NESTED_TAG_IS_STATIC,
        "NESTED_TAG_IS_STATIC",
        "nested: tag nonce is static",
    ),
    (
        StatusCode::NESTED_TAG_IS_HARD,
        "NESTED_TAG_IS_HARD",
        "nested: tag nonce is hardened",
    ),
    (StatusCode::LF_TAG_OK, "LF_TAG_OK", "LF tag operation succeeded"),
    (
        StatusCode::EM410X_TAG_NO_FOUND,
        "EM410X_TAG_NO_FOUND",
        "EM410x tag not found",
    ),
    (
        StatusCode::STATUS_PAR_ERR,
        "STATUS_PAR_ERR",
        "invalid command parameter",
    ),
    (
        StatusCode::STATUS_DEVICE_MODE_ERROR,
        "STATUS_DEVICE_MODE_ERROR",
        "command not supported in current device mode",
    ),
    (
        StatusCode::STATUS_INVALID_CMD,
        "STATUS_INVALID_CMD",
        "unknown command",
    ),
    (
        StatusCode::STATUS_DEVICE_SUCCESS,
        "STATUS_DEVICE_SUCCESS",
        "device operation succeeded",
    ),
    (
        StatusCode::STATUS_NOT_IMPLEMENTED,
        "STATUS_NOT_IMPLEMENTED",
        "command not implemented",
    ),
];

/// Message of a negative response whose code is not catalogued.
pub fn unknown_status_message(code: u16) -> String {
    format!("not positive response and unknown status {:#06x}", code)
}

/// Accept `observed` iff it is one of `acceptable`; otherwise raise a
/// negative response carrying the code's message.
pub fn classify(observed: StatusCode, acceptable: &[StatusCode]) -> Result<()> {
    if acceptable.contains(&observed) {
        return Ok(());
    }
    Err(Error::NegativeResponse {
        status: observed.as_u16(),
        message: observed.describe(),
    })
}
