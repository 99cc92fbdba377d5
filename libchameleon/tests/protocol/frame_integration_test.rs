use libchameleon::Error;
use libchameleon::protocol::{Decoded, Frame, FrameDecoder};

#[test]
fn get_app_version_request_bytes() {
    let bytes = Frame::encode(1000, 0, &[]).unwrap();
    assert_eq!(
        bytes,
        vec![0x11, 0xef, 0xe8, 0x03, 0x00, 0x00, 0x00, 0x00, 0x15, 0x00]
    );
}

#[test]
fn encode_decode_preserves_fields() {
    let payload: Vec<u8> = (0u8..=40).collect();
    let bytes = Frame::encode(2009, 0x68, &payload).unwrap();
    assert_eq!(bytes.len(), 10 + payload.len());
    let frame = Frame::decode_exact(&bytes).unwrap();
    assert_eq!(frame.command, 2009);
    assert_eq!(frame.status, 0x68);
    assert_eq!(frame.payload, payload);
}

#[test]
fn each_checksum_rejects_a_flipped_byte() {
    let bytes = Frame::encode(1008, 0, &[0x00, 0x02]).unwrap();
    // LRC1, a header byte, a payload byte, LRC3
    for idx in [1usize, 3, 9, bytes.len() - 1] {
        let mut bad = bytes.clone();
        bad[idx] ^= 0x40;
        match Frame::decode(&bad) {
            Decoded::Invalid { error, .. } => {
                assert!(matches!(error, Error::ChecksumMismatch { .. }))
            }
            other => panic!("byte {} corrupted, expected Invalid, got: {:?}", idx, other),
        }
    }
}

#[test]
fn oversized_payload_fails_to_encode() {
    let big = vec![0u8; 65536];
    match Frame::encode(4000, 0, &big) {
        Err(Error::InvalidLength { expected, actual }) => {
            assert_eq!(expected, 65535);
            assert_eq!(actual, 65536);
        }
        other => panic!("expected InvalidLength, got: {:?}", other),
    }
}

#[test]
fn stream_recovers_after_corrupted_frame() {
    let first = Frame::encode(1000, 0x68, &[0x01, 0x02]).unwrap();
    let second = Frame::encode(1011, 0x68, &[0xaa; 8]).unwrap();
    let mut corrupted = first.clone();
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0xff;

    let mut stream = vec![0x00, 0x13, 0x37];
    stream.extend_from_slice(&corrupted);
    stream.extend_from_slice(&second);

    let mut dec = FrameDecoder::new();
    // deliver in awkward chunks
    for chunk in stream.chunks(3) {
        dec.extend(chunk);
    }
    let frames = dec.drain_frames();
    assert_eq!(frames, vec![Frame::new(1011, 0x68, vec![0xaa; 8])]);
    assert_eq!(dec.discarded(), 3 + corrupted.len());
    assert_eq!(dec.pending(), 0);
}

#[test]
fn truncated_frame_waits_for_more() {
    let bytes = Frame::encode(1007, 0, b"nick").unwrap();
    match Frame::decode(&bytes[..bytes.len() - 2]) {
        Decoded::Incomplete { needed } => assert_eq!(needed, 2),
        other => panic!("expected Incomplete, got: {:?}", other),
    }
}
