// chameleon-rs/libchameleon/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info};
use serialport::SerialPort;

use crate::constants::DEFAULT_BAUD_RATE;
use crate::transport::traits::{Transport, TransportRead};
use crate::utils::timeout;
use crate::{Error, Result};

/// Serial (USB CDC) connection to a device.
///
/// The receive half is a cloned port handle; its read timeout doubles as
/// the poll interval at which the reader notices [`Transport::close`].
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    name: String,
    closed: Arc<AtomicBool>,
}

impl SerialTransport {
    /// Open `port_name` (e.g. `/dev/ttyACM0`, `COM19`) at the default baud
    /// rate.
    pub fn open(port_name: &str) -> Result<Self> {
        Self::open_with(
            port_name,
            DEFAULT_BAUD_RATE,
            timeout::ms(timeout::READ_POLL_MS),
        )
    }

    pub fn open_with(port_name: &str, baud_rate: u32, read_poll: Duration) -> Result<Self> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(read_poll)
            .open()?;
        info!("opened {} at {} baud", port_name, baud_rate);
        Ok(Self {
            port: Some(port),
            name: port_name.to_string(),
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Names of the serial ports present on this machine.
    pub fn available_ports() -> Result<Vec<String>> {
        Ok(serialport::available_ports()?
            .into_iter()
            .map(|p| p.port_name)
            .collect())
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::TransportClosed)
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn reader(&mut self) -> Result<Box<dyn TransportRead>> {
        let port = self.port()?.try_clone()?;
        Ok(Box::new(SerialReader {
            port,
            closed: Arc::clone(&self.closed),
        }))
    }

    fn close(&mut self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        if self.port.take().is_some() {
            debug!("closed {}", self.name);
        }
        Ok(())
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Receive half of a [`SerialTransport`].
pub struct SerialReader {
    port: Box<dyn SerialPort>,
    closed: Arc<AtomicBool>,
}

impl TransportRead for SerialReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.closed.load(Ordering::SeqCst) {
            return Ok(0);
        }
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                Err(Error::Timeout)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}
