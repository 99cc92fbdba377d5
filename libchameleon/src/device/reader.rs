// chameleon-rs/libchameleon/src/device/reader.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use log::{debug, trace, warn};

use crate::device::dispatcher::Shared;
use crate::protocol::FrameDecoder;
use crate::transport::TransportRead;
use crate::{Error, Result};

const READ_BUF_LEN: usize = 512;

/// Start the receive loop of a connection on its own thread.
pub(crate) fn spawn(
    rx: Box<dyn TransportRead>,
    shared: Arc<Shared>,
    shutdown: Arc<AtomicBool>,
    name: &str,
) -> Result<JoinHandle<()>> {
    let label = name.to_string();
    let handle = thread::Builder::new()
        .name(format!("chameleon-reader {}", name))
        .spawn(move || run(rx, &shared, &shutdown, &label))?;
    Ok(handle)
}

/// Read, reassemble and deliver frames until the channel closes, fails or
/// shutdown is requested. The connection is marked closed on the way out.
fn run(mut rx: Box<dyn TransportRead>, shared: &Shared, shutdown: &AtomicBool, name: &str) {
    let mut decoder = FrameDecoder::new();
    let mut buf = [0u8; READ_BUF_LEN];

    while !shutdown.load(Ordering::SeqCst) {
        match rx.read(&mut buf) {
            Ok(0) => {
                debug!("{}: channel closed", name);
                break;
            }
            Ok(n) => {
                trace!("{}: read {} bytes", name, n);
                decoder.extend(&buf[..n]);
                while let Some(frame) = decoder.next_frame() {
                    shared.deliver(frame);
                }
            }
            Err(Error::Timeout) => continue,
            Err(e) => {
                warn!("{}: reader stopped: {}", name, e);
                break;
            }
        }
    }

    if decoder.discarded() > 0 {
        debug!("{}: {} bytes discarded while resyncing", name, decoder.discarded());
    }
    shared.mark_closed();
}
