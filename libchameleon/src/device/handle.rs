// chameleon-rs/libchameleon/src/device/handle.rs

use std::time::Duration;

use log::info;

use crate::cmd::{ChameleonCmd, PositiveCmd};
use crate::device::builder::DeviceBuilder;
use crate::device::dispatcher::Dispatcher;
use crate::protocol::{Command, Frame, classify};
use crate::transport::Transport;
use crate::{Error, Result};

/// Connection to one device.
///
/// `Device` is `Send + Sync`; share it behind an `Arc` to issue commands
/// from several threads. Calls are serialised: a second caller blocks until
/// the first exchange finishes.
pub struct Device {
    dispatcher: Dispatcher,
    default_timeout: Duration,
}

impl Device {
    /// Connect over an existing transport with the default settings.
    pub fn new(transport: Box<dyn Transport>) -> Result<Self> {
        DeviceBuilder::new().with_transport(transport).build()
    }

    pub(crate) fn from_parts(dispatcher: Dispatcher, default_timeout: Duration) -> Self {
        info!(
            "connected to {} (default timeout {:?})",
            dispatcher.name(),
            default_timeout
        );
        Self {
            dispatcher,
            default_timeout,
        }
    }

    /// Open a serial port (e.g. `/dev/ttyACM0`) and connect.
    #[cfg(feature = "serial")]
    pub fn open_serial(port_name: &str) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(port_name)?;
        Self::new(Box::new(transport))
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Send a frame built by hand and wait for the reply with the same
    /// command id. `timeout` of `None` uses the connection default.
    pub fn exchange(
        &self,
        command: u16,
        status: u16,
        payload: &[u8],
        timeout: Option<Duration>,
    ) -> Result<Frame> {
        self.dispatcher.send_sync(
            command,
            status,
            payload,
            timeout.unwrap_or(self.default_timeout),
        )
    }

    /// Execute a command and return its reply frame whatever its status.
    pub fn execute(&self, cmd: &Command) -> Result<Frame> {
        if !cmd.expects_reply() {
            return Err(Error::InvalidArgument(format!(
                "{} gets no reply, use send_only",
                cmd.id()
            )));
        }
        self.exchange(cmd.id().as_u16(), 0, &cmd.encode(), cmd.timeout())
    }

    /// Execute a command and fail with [`Error::NegativeResponse`] unless
    /// the reply status is one the command accepts.
    pub fn execute_checked(&self, cmd: &Command) -> Result<Frame> {
        let frame = self.execute(cmd)?;
        classify(frame.status_code(), cmd.acceptable_statuses())?;
        Ok(frame)
    }

    /// Write a command the device does not answer. Commands that make the
    /// device drop the link (bootloader entry) also close the connection.
    pub fn send_only(&self, cmd: &Command) -> Result<()> {
        let then_close = matches!(cmd, Command::EnterBootloader);
        self.dispatcher
            .send_fire_and_forget(cmd.id().as_u16(), 0, &cmd.encode(), then_close)
    }

    /// Raw call style: every operation returns the reply frame unchecked.
    pub fn cmd(&self) -> ChameleonCmd<'_> {
        ChameleonCmd::new(self)
    }

    /// Checked call style: operations validate the status and decode the
    /// reply.
    pub fn positive(&self) -> PositiveCmd<'_> {
        PositiveCmd::new(self)
    }

    pub fn close(&self) -> Result<()> {
        self.dispatcher.close()
    }

    pub fn is_closed(&self) -> bool {
        self.dispatcher.is_closed()
    }
}
