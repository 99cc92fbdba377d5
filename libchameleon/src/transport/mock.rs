// chameleon-rs/libchameleon/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::warn;

use crate::protocol::{Frame, FrameDecoder};
use crate::transport::traits::{Transport, TransportRead};
use crate::utils::timeout;
use crate::{Error, Result};

/// Simulated device: receives each complete frame the host writes and
/// returns the frames to send back (possibly none, possibly several).
///
/// Runs while the mock's lock is held, so it must not call back into the
/// [`MockLink`].
pub type Responder = Box<dyn FnMut(&Frame) -> Vec<Frame> + Send>;

#[derive(Default)]
struct MockState {
    written: Vec<Vec<u8>>,
    inbound: VecDeque<u8>,
    closed: bool,
    fail_writes: bool,
    read_chunk: Option<usize>,
    responder: Option<Responder>,
    write_decoder: FrameDecoder,
}

#[derive(Default)]
struct Shared {
    state: Mutex<MockState>,
    cond: Condvar,
}

/// Test-side handle of a [`MockTransport`]: inspects what the host wrote
/// and plays the device's side of the channel.
#[derive(Clone, Default)]
pub struct MockLink {
    shared: Arc<Shared>,
}

impl MockLink {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue raw bytes for the host to read.
    pub fn push_bytes(&self, bytes: &[u8]) {
        self.lock().inbound.extend(bytes.iter().copied());
        self.shared.cond.notify_all();
    }

    /// Queue an encoded frame for the host to read.
    pub fn push_frame(&self, frame: &Frame) -> Result<()> {
        let bytes = frame.to_bytes()?;
        self.push_bytes(&bytes);
        Ok(())
    }

    /// Install the simulated device.
    pub fn set_responder<F>(&self, responder: F)
    where
        F: FnMut(&Frame) -> Vec<Frame> + Send + 'static,
    {
        self.lock().responder = Some(Box::new(responder));
    }

    pub fn clear_responder(&self) {
        self.lock().responder = None;
    }

    /// Hand the host at most `n` bytes per read.
    pub fn set_read_chunk(&self, n: usize) {
        self.lock().read_chunk = Some(n.max(1));
    }

    /// Make subsequent host writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Each `write_all` call the host made, in order.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.lock().written.clone()
    }

    /// Everything the host wrote, concatenated.
    pub fn written_bytes(&self) -> Vec<u8> {
        self.lock().written.concat()
    }

    /// Frames decoded from everything the host wrote.
    pub fn written_frames(&self) -> Vec<Frame> {
        let mut dec = FrameDecoder::new();
        dec.extend(&self.written_bytes());
        dec.drain_frames()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Simulate the device going away (cable pulled, port vanished).
    pub fn close_remote(&self) {
        self.lock().closed = true;
        self.shared.cond.notify_all();
    }
}

/// In-memory duplex transport for tests and demos.
pub struct MockTransport {
    link: MockLink,
    poll: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            link: MockLink::default(),
            poll: timeout::ms(timeout::READ_POLL_MS),
        }
    }

    /// Mock whose device answers every frame through `responder`.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: FnMut(&Frame) -> Vec<Frame> + Send + 'static,
    {
        let mock = Self::new();
        mock.link.set_responder(responder);
        mock
    }

    pub fn link(&self) -> MockLink {
        self.link.clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut guard = self.link.lock();
        let st = &mut *guard;
        if st.closed {
            return Err(Error::TransportClosed);
        }
        if st.fail_writes {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "simulated write failure",
            )));
        }
        st.written.push(data.to_vec());

        if let Some(responder) = st.responder.as_mut() {
            st.write_decoder.extend(data);
            while let Some(request) = st.write_decoder.next_frame() {
                for reply in responder(&request) {
                    match reply.to_bytes() {
                        Ok(bytes) => st.inbound.extend(bytes),
                        Err(e) => warn!("mock responder produced unencodable frame: {}", e),
                    }
                }
            }
        }
        drop(guard);
        self.link.shared.cond.notify_all();
        Ok(())
    }

    fn reader(&mut self) -> Result<Box<dyn TransportRead>> {
        Ok(Box::new(MockReader {
            link: self.link.clone(),
            poll: self.poll,
        }))
    }

    fn close(&mut self) -> Result<()> {
        self.link.close_remote();
        Ok(())
    }

    fn name(&self) -> String {
        "mock".to_string()
    }
}

/// Receive half of a [`MockTransport`].
pub struct MockReader {
    link: MockLink,
    poll: Duration,
}

impl TransportRead for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut st = self.link.lock();
        loop {
            if !st.inbound.is_empty() {
                let limit = st.read_chunk.unwrap_or(usize::MAX);
                let n = buf.len().min(st.inbound.len()).min(limit);
                for (slot, byte) in buf.iter_mut().zip(st.inbound.drain(..n)) {
                    *slot = byte;
                }
                return Ok(n);
            }
            if st.closed {
                return Ok(0);
            }
            let (guard, res) = self
                .link
                .shared
                .cond
                .wait_timeout(st, self.poll)
                .unwrap_or_else(PoisonError::into_inner);
            st = guard;
            if res.timed_out() && st.inbound.is_empty() && !st.closed {
                return Err(Error::Timeout);
            }
        }
    }
}
