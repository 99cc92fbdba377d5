// chameleon-rs/libchameleon/src/device/builder.rs

use std::time::Duration;

use crate::device::dispatcher::Dispatcher;
use crate::device::handle::Device;
use crate::transport::Transport;
use crate::utils::timeout;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    default_timeout: Duration,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            default_timeout: timeout::default_timeout(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port as the transport.
    #[cfg(feature = "serial")]
    pub fn with_serial_port(self, port_name: &str) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(port_name)?;
        Ok(self.with_transport(Box::new(transport)))
    }

    /// Timeout for commands that do not carry their own.
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Start the connection. Requires a transport.
    pub fn build(self) -> Result<Device> {
        if self.default_timeout.is_zero() {
            return Err(Error::InvalidArgument(
                "default timeout must be non-zero".into(),
            ));
        }
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidArgument("no transport configured".into()))?;
        let dispatcher = Dispatcher::new(transport)?;
        Ok(Device::from_parts(dispatcher, self.default_timeout))
    }
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
