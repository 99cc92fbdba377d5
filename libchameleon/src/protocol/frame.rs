// chameleon-rs/libchameleon/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_MAX_PAYLOAD_LEN, FRAME_MIN_LEN, FRAME_SOF, FRAME_SOF_LRC,
};
use crate::protocol::checksum::{lrc, lrc_ok};
use crate::protocol::status::StatusCode;
use crate::{Error, Result};

/// One protocol message.
///
/// Wire format, numeric fields little-endian:
/// [SOF 0x11] [LRC1] [CMD(2)] [STATUS(2)] [LEN(2)] [LRC2] [Payload(LEN)] [LRC3]
///
/// LRC1 covers SOF, LRC2 covers CMD..LEN, LRC3 covers everything before it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub command: u16,
    pub status: u16,
    pub payload: Vec<u8>,
}

/// Result of one decode step over a receive buffer.
#[derive(Debug)]
pub enum Decoded {
    /// A complete, verified frame occupying the first `consumed` bytes.
    Frame { frame: Frame, consumed: usize },
    /// The buffer holds a frame prefix; at least `needed` more bytes are
    /// required before anything can be decided.
    Incomplete { needed: usize },
    /// The first `skip` bytes cannot start a valid frame and must be dropped.
    Invalid { skip: usize, error: Error },
}

impl Frame {
    pub fn new(command: u16, status: u16, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            command,
            status,
            payload: payload.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::new(self.status)
    }

    /// Encode this frame for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Self::encode(self.command, self.status, &self.payload)
    }

    /// Encode a message into a full wire frame
    pub fn encode(command: u16, status: u16, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > FRAME_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(FRAME_MIN_LEN + payload.len());
        out.push(FRAME_SOF);
        out.push(lrc(&[FRAME_SOF]));
        out.extend_from_slice(&command.to_le_bytes());
        out.extend_from_slice(&status.to_le_bytes());
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.push(lrc(&out[2..8]));
        out.extend_from_slice(payload);
        out.push(lrc(&out));
        Ok(out)
    }

    /// Try to decode one frame from the front of `buf`.
    ///
    /// Never panics and never reads past the declared frame, so `buf` may
    /// hold any number of following bytes.
    pub fn decode(buf: &[u8]) -> Decoded {
        if buf.is_empty() {
            return Decoded::Incomplete {
                needed: FRAME_MIN_LEN,
            };
        }

        if buf[0] != FRAME_SOF {
            let skip = buf
                .iter()
                .position(|&b| b == FRAME_SOF)
                .unwrap_or(buf.len());
            return Decoded::Invalid {
                skip,
                error: Error::FrameFormat(format!("{} byte(s) before start of frame", skip)),
            };
        }

        if buf.len() < 2 {
            return Decoded::Incomplete {
                needed: FRAME_MIN_LEN - buf.len(),
            };
        }
        if buf[1] != FRAME_SOF_LRC {
            return Decoded::Invalid {
                skip: 1,
                error: Error::ChecksumMismatch {
                    expected: FRAME_SOF_LRC,
                    actual: buf[1],
                },
            };
        }

        if buf.len() < FRAME_HEADER_LEN {
            return Decoded::Incomplete {
                needed: FRAME_MIN_LEN - buf.len(),
            };
        }
        let header = &buf[2..8];
        if !lrc_ok(header, buf[8]) {
            // The length field cannot be trusted; resynchronise byte by byte.
            return Decoded::Invalid {
                skip: 1,
                error: Error::ChecksumMismatch {
                    expected: lrc(header),
                    actual: buf[8],
                },
            };
        }

        let command = u16::from_le_bytes([buf[2], buf[3]]);
        let status = u16::from_le_bytes([buf[4], buf[5]]);
        let len = u16::from_le_bytes([buf[6], buf[7]]) as usize;

        let total = FRAME_MIN_LEN + len;
        if buf.len() < total {
            return Decoded::Incomplete {
                needed: total - buf.len(),
            };
        }

        let body = &buf[..total - 1];
        let check = buf[total - 1];
        if !lrc_ok(body, check) {
            return Decoded::Invalid {
                skip: total,
                error: Error::ChecksumMismatch {
                    expected: lrc(body),
                    actual: check,
                },
            };
        }

        Decoded::Frame {
            frame: Frame {
                command,
                status,
                payload: buf[FRAME_HEADER_LEN..total - 1].to_vec(),
            },
            consumed: total,
        }
    }

    /// Decode a buffer that must hold exactly one frame.
    pub fn decode_exact(buf: &[u8]) -> Result<Frame> {
        match Self::decode(buf) {
            Decoded::Frame { frame, consumed } if consumed == buf.len() => Ok(frame),
            Decoded::Frame { consumed, .. } => Err(Error::InvalidLength {
                expected: consumed,
                actual: buf.len(),
            }),
            Decoded::Incomplete { needed } => Err(Error::InvalidLength {
                expected: buf.len() + needed,
                actual: buf.len(),
            }),
            Decoded::Invalid { error, .. } => Err(error),
        }
    }
}
