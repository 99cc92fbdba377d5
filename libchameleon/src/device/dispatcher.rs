// chameleon-rs/libchameleon/src/device/dispatcher.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::device::reader;
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// The single outstanding request of a connection.
#[derive(Debug, Default)]
struct Pending {
    /// Command id the caller is waiting for; `None` when idle.
    expected: Option<u16>,
    reply: Option<Frame>,
    closed: bool,
}

/// State shared between callers and the reader thread.
#[derive(Debug, Default)]
pub(crate) struct Shared {
    state: Mutex<Pending>,
    cond: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Pending> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hand a decoded frame to the waiting caller. Frames nobody waits for
    /// (late replies, unsolicited frames, mismatched command ids) are
    /// dropped.
    pub(crate) fn deliver(&self, frame: Frame) {
        let mut st = self.lock();
        match st.expected {
            Some(cmd) if cmd == frame.command && st.reply.is_none() => {
                trace!("<- cmd {} status {:#06x}", frame.command, frame.status);
                st.reply = Some(frame);
                drop(st);
                self.cond.notify_all();
            }
            Some(cmd) => warn!(
                "discarding frame for cmd {} while waiting for cmd {}",
                frame.command, cmd
            ),
            None => warn!(
                "discarding unsolicited frame for cmd {} (status {:#06x})",
                frame.command, frame.status
            ),
        }
    }

    /// Mark the connection dead and wake every waiter.
    pub(crate) fn mark_closed(&self) {
        self.lock().closed = true;
        self.cond.notify_all();
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

/// Request/reply correlation over one transport.
///
/// At most one request is in flight: the write half stays locked for the
/// whole exchange, so concurrent callers queue up behind it.
pub struct Dispatcher {
    writer: Mutex<Box<dyn Transport>>,
    shared: Arc<Shared>,
    shutdown: Arc<AtomicBool>,
    reader: Mutex<Option<JoinHandle<()>>>,
    name: String,
}

impl Dispatcher {
    /// Take ownership of `transport` and start its reader thread.
    pub fn new(mut transport: Box<dyn Transport>) -> Result<Self> {
        let name = transport.name();
        let rx = transport.reader()?;
        let shared = Arc::new(Shared::default());
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = reader::spawn(rx, Arc::clone(&shared), Arc::clone(&shutdown), &name)?;
        debug!("dispatcher started on {}", name);
        Ok(Self {
            writer: Mutex::new(transport),
            shared,
            shutdown,
            reader: Mutex::new(Some(handle)),
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn lock_writer(&self) -> MutexGuard<'_, Box<dyn Transport>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Send one frame and block until the reply carrying the same command
    /// id arrives, `timeout` elapses, or the transport closes.
    pub fn send_sync(
        &self,
        command: u16,
        status: u16,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<Frame> {
        let bytes = Frame::encode(command, status, payload)?;
        let mut writer = self.lock_writer();

        {
            let mut st = self.shared.lock();
            if st.closed {
                return Err(Error::TransportClosed);
            }
            // register before writing so a fast reply is not lost
            st.expected = Some(command);
            st.reply = None;
        }

        debug!(
            "-> cmd {} status {:#06x} payload [{}]",
            command,
            status,
            bytes_to_hex(payload)
        );
        if let Err(e) = writer.write_all(&bytes) {
            self.shared.lock().expected = None;
            return Err(e);
        }

        // a timeout too large to represent waits until reply or closure
        let deadline = Instant::now().checked_add(timeout);
        let mut st = self.shared.lock();
        let outcome = loop {
            if let Some(reply) = st.reply.take() {
                break Ok(reply);
            }
            if st.closed {
                break Err(Error::TransportClosed);
            }
            st = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        warn!("cmd {} timed out after {:?}", command, timeout);
                        break Err(Error::Timeout);
                    }
                    self.shared
                        .cond
                        .wait_timeout(st, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
                None => self
                    .shared
                    .cond
                    .wait(st)
                    .unwrap_or_else(PoisonError::into_inner),
            };
        };
        st.expected = None;
        drop(st);
        drop(writer);

        if let Ok(reply) = &outcome {
            debug!(
                "<- cmd {} status {:#06x} payload [{}]",
                reply.command,
                reply.status,
                bytes_to_hex(&reply.payload)
            );
        }
        outcome
    }

    /// Write one frame without waiting for any reply. With `then_close`
    /// the connection is closed right after the write.
    pub fn send_fire_and_forget(
        &self,
        command: u16,
        status: u16,
        payload: &[u8],
        then_close: bool,
    ) -> Result<()> {
        let bytes = Frame::encode(command, status, payload)?;
        {
            let mut writer = self.lock_writer();
            if self.shared.is_closed() {
                return Err(Error::TransportClosed);
            }
            debug!("-> cmd {} status {:#06x} (no reply expected)", command, status);
            writer.write_all(&bytes)?;
        }
        if then_close {
            self.close()?;
        }
        Ok(())
    }

    /// Close the transport and stop the reader thread. Pending waits fail
    /// with [`Error::TransportClosed`]. Idempotent.
    pub fn close(&self) -> Result<()> {
        self.shutdown.store(true, Ordering::SeqCst);
        // wake a waiting caller first so it releases the write half
        self.shared.mark_closed();
        let res = self.lock_writer().close();

        let handle = self
            .reader
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("reader thread of {} panicked", self.name);
            }
            debug!("dispatcher on {} closed", self.name);
        }
        res
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("closing {} failed: {}", self.name, e);
        }
    }
}
