use libchameleon::protocol::responses::{
    decode_app_version, decode_block, decode_detection_count, decode_device_address,
    decode_device_mode, decode_em410x_id, decode_nick_name,
};
use libchameleon::types::DeviceMode;
use libchameleon::Error;

#[test]
fn version_and_identity() {
    assert_eq!(decode_app_version(&[0x00, 0x01]).unwrap(), 0x0100);
    assert_eq!(
        decode_device_address(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
        "ffeeddccbbaa"
    );
}

#[test]
fn device_mode_byte() {
    assert_eq!(decode_device_mode(&[1]).unwrap(), DeviceMode::Reader);
    assert_eq!(decode_device_mode(&[0]).unwrap(), DeviceMode::Tag);
    assert!(decode_device_mode(&[]).is_err());
}

#[test]
fn block_requires_sixteen_bytes() {
    assert!(decode_block(&[0u8; 16]).is_ok());
    match decode_block(&[0u8; 15]) {
        Err(Error::InvalidLength { expected, actual }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected InvalidLength, got: {:?}", other),
    }
}

#[test]
fn em410x_and_nickname() {
    let id = decode_em410x_id(&[0x01, 0x23, 0x45, 0x67, 0x89]).unwrap();
    assert_eq!(id.to_hex(), "0123456789");
    assert!(decode_em410x_id(&[0x01]).is_err());
    assert_eq!(decode_nick_name("café".as_bytes()), "café");
}

#[test]
fn detection_count_is_big_endian() {
    assert_eq!(decode_detection_count(&[0, 0, 1, 0]).unwrap(), 256);
    assert!(decode_detection_count(&[0, 1]).is_err());
}
