// chameleon-rs/libchameleon/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// No matching reply arrived before the deadline. The device state is
    /// unknown; the caller may retry.
    #[error("operation timed out")]
    Timeout,

    #[error("transport closed")]
    TransportClosed,

    /// The device answered, but with a status outside the accepted set.
    #[error("negative response (status {status:#06x}): {message}")]
    NegativeResponse { status: u16, message: String },

    #[cfg(feature = "async")]
    #[error("background task failed: {0}")]
    TaskJoin(String),
}

impl Error {
    /// `true` for failures that say nothing about device state and may be
    /// retried on the same connection.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout)
    }

    /// `true` when the connection can no longer be used.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::TransportClosed | Error::Io(_) => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }

    /// Status code carried by a negative response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NegativeResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
