// chameleon-rs/libchameleon/src/device/mod.rs

#[cfg(feature = "async")]
pub mod async_device;
pub mod builder;
pub mod dispatcher;
pub mod handle;
mod reader;

#[cfg(feature = "async")]
pub use async_device::{AsyncDevice, AsyncExchange};
pub use builder::DeviceBuilder;
pub use dispatcher::Dispatcher;
pub use handle::Device;
