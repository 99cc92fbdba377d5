#[path = "../common/mod.rs"]
mod common;

use libchameleon::protocol::{Frame, StatusCode};
use libchameleon::types::{KeyType, TagType};
use libchameleon::Error;

#[test]
fn raw_calls_write_expected_frames() {
    let (dev, link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_NO, &[])]
    });
    let cmd = dev.cmd();

    // every reply is a failure status, yet the raw style returns it
    assert_eq!(
        cmd.scan_tag_14a().unwrap().status_code(),
        StatusCode::HF_TAG_NO
    );
    cmd.set_slot_tag_type(4, TagType::Ntag215).unwrap();
    cmd.set_slot_data_default(4, TagType::Ntag215).unwrap();
    cmd.acquire_darkside(0, KeyType::A, false, 15).unwrap();
    cmd.set_mf1_anti_collision_res(0x08, [0x04, 0x00], &[1, 2, 3, 4])
        .unwrap();
    cmd.get_mf1_detection_log(3).unwrap();

    let sent = link.written_frames();
    let summary: Vec<(u16, Vec<u8>)> = sent.into_iter().map(|f| (f.command, f.payload)).collect();
    assert_eq!(
        summary,
        vec![
            (2000, vec![]),
            (1004, vec![3, 7]),
            (1005, vec![3, 7]),
            (2004, vec![0x60, 0, 0, 15]),
            (4001, vec![0x08, 0x04, 0x00, 1, 2, 3, 4]),
            (5005, vec![0, 0, 0, 3]),
        ]
    );
}

#[test]
fn invalid_arguments_never_reach_the_wire() {
    let (dev, link) = common::mock_device(common::fixtures::info_responder);
    let cmd = dev.cmd();
    let p = dev.positive();

    assert!(matches!(
        cmd.set_slot_activated(9),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        p.get_slot_tag_nick_name(0, libchameleon::SenseType::Hf),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        cmd.auth_mf1_key(0, KeyType::A, &[0xff; 7]),
        Err(Error::InvalidLength { expected: 6, actual: 7 })
    ));
    assert!(matches!(
        p.set_em410x_sim_id(&[1, 2, 3]),
        Err(Error::InvalidLength { expected: 5, actual: 3 })
    ));
    assert!(p.set_mf1_block_data(0, &[0u8; 17]).is_err());
    assert!(p.set_mf1_anti_collision_res(0x08, [0x04, 0x00], &[]).is_err());

    assert!(link.written().is_empty());
}
