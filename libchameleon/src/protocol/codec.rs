// chameleon-rs/libchameleon/src/protocol/codec.rs

use log::{debug, trace};

use super::frame::{Decoded, Frame};

/// Reassembles frames from an arbitrary byte stream.
///
/// Bytes are appended with [`FrameDecoder::extend`] as they arrive, in any
/// chunking; [`FrameDecoder::next_frame`] yields complete frames and drops
/// corrupted spans so a damaged frame never blocks the ones after it.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: Vec<u8>,
    discarded: usize,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append received bytes.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pop the next complete frame, if the buffer holds one.
    pub fn next_frame(&mut self) -> Option<Frame> {
        loop {
            match Frame::decode(&self.buf) {
                Decoded::Frame { frame, consumed } => {
                    self.buf.drain(..consumed);
                    trace!(
                        "decoded frame cmd={} status={:#06x} len={}",
                        frame.command,
                        frame.status,
                        frame.payload.len()
                    );
                    return Some(frame);
                }
                Decoded::Incomplete { .. } => return None,
                Decoded::Invalid { skip, error } => {
                    debug!("dropping {} byte(s) while resynchronising: {}", skip, error);
                    self.buf.drain(..skip);
                    self.discarded += skip;
                }
            }
        }
    }

    /// Drain every complete frame currently buffered.
    pub fn drain_frames(&mut self) -> Vec<Frame> {
        std::iter::from_fn(|| self.next_frame()).collect()
    }

    /// Bytes buffered but not yet part of a complete frame.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Total bytes thrown away by resynchronisation since creation.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
