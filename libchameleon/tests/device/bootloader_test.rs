#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use libchameleon::protocol::Frame;
use libchameleon::transport::MockLink;
use libchameleon::{Device, Error};

#[test]
fn enter_dfu_mode_writes_once_and_closes() {
    // default timeout far above the bound checked below
    let (dev, link) = common::silent_device(Duration::from_secs(5));
    assert_dfu_entry_closes(&dev, &link);
}

#[test]
fn enter_dfu_mode_ignores_an_answering_device() {
    // firmware that acknowledges everything, including 1010
    let (dev, link) = common::mock_device(|req: &Frame| vec![common::fixtures::device_ok(req)]);
    assert_dfu_entry_closes(&dev, &link);
}

fn assert_dfu_entry_closes(dev: &Device, link: &MockLink) {
    let start = Instant::now();
    dev.positive().enter_dfu_mode().unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));

    assert_eq!(link.written().len(), 1);
    assert_eq!(link.written_frames(), vec![Frame::new(1010, 0, Vec::<u8>::new())]);
    assert!(link.is_closed());
    assert!(dev.is_closed());

    assert!(matches!(
        dev.cmd().get_app_version(),
        Err(Error::TransportClosed)
    ));
    assert!(matches!(
        dev.cmd().enter_dfu_mode(),
        Err(Error::TransportClosed)
    ));
}
