// chameleon-rs/libchameleon/src/device/async_device.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::device::handle::Device;
use crate::protocol::{Command, Frame};
use crate::{Error, Result};

/// Command execution for callers running on an async runtime.
#[async_trait]
pub trait AsyncExchange: Send + Sync {
    async fn execute(&self, cmd: Command) -> Result<Frame>;
    async fn execute_checked(&self, cmd: Command) -> Result<Frame>;
    async fn send_only(&self, cmd: Command) -> Result<()>;
}

/// [`Device`] wrapper whose calls run on tokio's blocking pool, so a
/// waiting exchange never stalls the runtime.
#[derive(Clone)]
pub struct AsyncDevice {
    inner: Arc<Device>,
}

impl AsyncDevice {
    pub fn new(device: Device) -> Self {
        Self {
            inner: Arc::new(device),
        }
    }

    /// The underlying blocking handle.
    pub fn blocking(&self) -> &Device {
        &self.inner
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Device) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let device = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&*device))
            .await
            .map_err(|e| Error::TaskJoin(e.to_string()))?
    }

    pub async fn close(&self) -> Result<()> {
        self.run(|d| d.close()).await
    }
}

#[async_trait]
impl AsyncExchange for AsyncDevice {
    async fn execute(&self, cmd: Command) -> Result<Frame> {
        self.run(move |d| d.execute(&cmd)).await
    }

    async fn execute_checked(&self, cmd: Command) -> Result<Frame> {
        self.run(move |d| d.execute_checked(&cmd)).await
    }

    async fn send_only(&self, cmd: Command) -> Result<()> {
        self.run(move |d| d.send_only(&cmd)).await
    }
}
