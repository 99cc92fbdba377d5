#[path = "../common/mod.rs"]
mod common;

use libchameleon::Error;
use libchameleon::protocol::Frame;
use libchameleon::transport::{MockTransport, Transport};

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    let link = m.link();
    let mut rx = m.reader().unwrap();

    m.write_all(&[0xaa]).unwrap();
    assert_eq!(link.written(), vec![vec![0xaa]]);

    link.push_bytes(&[0x01, 0x02]);
    let mut buf = [0u8; 16];
    let n = rx.read(&mut buf).unwrap();
    assert_eq!(&buf[..n], &[0x01, 0x02]);
}

#[test]
fn responder_sees_whole_frames_only() {
    let mut m = MockTransport::with_responder(|req: &Frame| {
        vec![Frame::new(req.command, 0x68, vec![req.payload.len() as u8])]
    });
    let link = m.link();
    let mut rx = m.reader().unwrap();

    let bytes = Frame::encode(1007, 0, b"slot-nick").unwrap();
    for b in &bytes {
        m.write_all(std::slice::from_ref(b)).unwrap();
    }
    assert_eq!(link.written().len(), bytes.len());

    let mut buf = [0u8; 64];
    let n = rx.read(&mut buf).unwrap();
    assert_eq!(
        Frame::decode_exact(&buf[..n]).unwrap(),
        Frame::new(1007, 0x68, vec![9])
    );
}

#[test]
fn closed_mock_reports_eof_then_rejects_writes() {
    let mut m = MockTransport::new();
    let mut rx = m.reader().unwrap();
    m.close().unwrap();
    let mut buf = [0u8; 4];
    assert_eq!(rx.read(&mut buf).unwrap(), 0);
    assert!(matches!(m.write_all(&[1]), Err(Error::TransportClosed)));
    // closing twice is fine
    m.close().unwrap();
}
