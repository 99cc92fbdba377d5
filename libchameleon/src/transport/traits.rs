// chameleon-rs/libchameleon/src/transport/traits.rs

use crate::Result;

/// Transport abstracts the byte channel away from framing and dispatch.
///
/// The channel is a plain byte stream: writes may be split and reads may
/// return any number of bytes, so framing never relies on message
/// boundaries. A transport is split in two halves, this write half and an
/// independent receive half obtained from [`Transport::reader`], so a
/// background thread can block on reads while callers write.
pub trait Transport: Send {
    /// Write all bytes to the channel.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Create the receive half. Called once per connection.
    fn reader(&mut self) -> Result<Box<dyn TransportRead>>;

    /// Close the channel. The receive half must observe the closure: its
    /// next `read` returns `Ok(0)` or an error. Closing twice is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Human-readable channel name for logs.
    fn name(&self) -> String {
        "transport".to_string()
    }
}

/// Receive half of a [`Transport`].
pub trait TransportRead: Send {
    /// Block until at least one byte is available and copy up to
    /// `buf.len()` bytes into `buf`.
    ///
    /// - `Ok(0)`: the channel is closed, no further bytes will arrive.
    /// - `Err(Error::Timeout)`: nothing arrived within the poll interval;
    ///   the caller may check for shutdown and read again.
    /// - any other error: the channel is broken.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}
