// Shared helpers for the integration tests; each aggregator pulls this in
// through a `#[path]` module, so not every helper is used everywhere.
#![allow(dead_code)]


use std::time::Duration;

use libchameleon::protocol::Frame;
use libchameleon::transport::{MockLink, MockTransport};
use libchameleon::{Device, DeviceBuilder};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Device backed by a mock whose simulated firmware is `responder`.
pub fn mock_device<F>(responder: F) -> (Device, MockLink)
where
    F: FnMut(&Frame) -> Vec<Frame> + Send + 'static,
{
    init_logging();
    let mock = MockTransport::with_responder(responder);
    let link = mock.link();
    let device = Device::new(Box::new(mock)).unwrap();
    (device, link)
}

/// Device whose mock never answers, with a short default timeout.
pub fn silent_device(timeout: Duration) -> (Device, MockLink) {
    init_logging();
    let mock = MockTransport::new();
    let link = mock.link();
    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .default_timeout(timeout)
        .build()
        .unwrap();
    (device, link)
}
