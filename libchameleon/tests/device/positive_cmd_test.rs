#[path = "../common/mod.rs"]
mod common;

use libchameleon::protocol::{Frame, StatusCode};
use libchameleon::types::{BlockData, KeyType, NtLevel, SenseType};
use libchameleon::Error;

#[test]
fn read_block_returns_sixteen_bytes() {
    let (dev, link) = common::mock_device(|req: &Frame| {
        assert_eq!(req.command, 2008);
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_OK, &[0u8; 16])]
    });

    let key = common::fixtures::default_key_bytes();
    let block = dev.positive().read_mf1_block(1, KeyType::A, &key).unwrap();
    assert_eq!(block, BlockData::from_bytes([0u8; 16]));

    let sent = link.written_frames();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].command, 2008);
    assert_eq!(sent[0].status, 0);
    assert_eq!(
        sent[0].payload,
        vec![0x60, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn read_block_with_wrong_key_is_negative() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::MF_ERRAUTH, &[])]
    });

    let key = common::fixtures::default_key_bytes();
    match dev.positive().read_mf1_block(1, KeyType::A, &key) {
        Err(Error::NegativeResponse { status, message }) => {
            assert_eq!(status, 0x06);
            assert_eq!(message, "MIFARE key authentication failed");
        }
        other => panic!("expected NegativeResponse, got: {:?}", other),
    }

    // the raw style hands the same reply back untouched
    let frame = dev.cmd().read_mf1_block(1, KeyType::A, &key).unwrap();
    assert_eq!(frame.status_code(), StatusCode::MF_ERRAUTH);
}

#[test]
fn auth_key_reports_rejection_as_false() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        let status = if req.payload[2..] == [0xff; 6] {
            StatusCode::HF_TAG_OK
        } else {
            StatusCode::MF_ERRAUTH
        };
        vec![common::fixtures::reply(req, status, &[])]
    });
    let positive = dev.positive();
    assert!(positive.auth_mf1_key(0, KeyType::A, &[0xff; 6]).unwrap());
    assert!(!positive.auth_mf1_key(0, KeyType::A, &[0x00; 6]).unwrap());
}

#[test]
fn tag_lost_during_auth_is_still_an_error() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_NO, &[])]
    });
    let err = dev
        .positive()
        .auth_mf1_key(0, KeyType::B, &[0xff; 6])
        .unwrap_err();
    assert_eq!(err.status(), Some(0x01));
}

#[test]
fn device_info_queries() {
    let (dev, _link) = common::mock_device(common::fixtures::info_responder);
    let p = dev.positive();
    assert_eq!(p.get_app_version().unwrap(), 0x0102);
    assert!(p.is_reader_device_mode().unwrap());
    assert_eq!(p.get_device_chip_id().unwrap(), "1234abcd0000ff01");
    assert_eq!(p.get_device_address().unwrap(), "c60504030201");
    assert_eq!(
        p.get_slot_tag_nick_name(1, SenseType::Hf).unwrap(),
        "office badge"
    );
    assert_eq!(p.get_mf1_detection_count().unwrap(), 0x0102);
}

#[test]
fn em410x_scan() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        let frame = match req.command {
            3000 => common::fixtures::reply(
                req,
                StatusCode::LF_TAG_OK,
                &common::fixtures::sample_em410x_bytes(),
            ),
            _ => common::fixtures::reply(req, StatusCode::EM410X_TAG_NO_FOUND, &[]),
        };
        vec![frame]
    });
    let p = dev.positive();
    assert_eq!(p.read_em_410x().unwrap(), common::fixtures::sample_em410x());
    match p.write_em_410x_to_t55xx(&common::fixtures::sample_em410x_bytes()) {
        Err(Error::NegativeResponse { status, message }) => {
            assert_eq!(status, 0x41);
            assert_eq!(message, "EM410x tag not found");
        }
        other => panic!("expected NegativeResponse, got: {:?}", other),
    }
}

#[test]
fn darkside_detect_accepts_verdicts() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(
            req,
            StatusCode::DARKSIDE_NACK_NO_SEND,
            &[],
        )]
    });
    let frame = dev.positive().detect_darkside_support().unwrap();
    assert_eq!(frame.status_code(), StatusCode::DARKSIDE_NACK_NO_SEND);
}

#[test]
fn nt_level_detect_returns_the_verdict() {
    let cases = [
        (StatusCode::HF_TAG_OK, NtLevel::Weak),
        (StatusCode::NESTED_TAG_IS_STATIC, NtLevel::Static),
        (StatusCode::NESTED_TAG_IS_HARD, NtLevel::Hard),
    ];
    for (status, level) in cases {
        let (dev, _link) = common::mock_device(move |req: &Frame| {
            assert_eq!(req.command, 2002);
            vec![common::fixtures::reply(req, status, &[])]
        });
        assert_eq!(dev.positive().detect_mf1_nt_level().unwrap(), level);
    }

    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_NO, &[])]
    });
    let err = dev.positive().detect_mf1_nt_level().unwrap_err();
    assert!(matches!(err, Error::NegativeResponse { status: 0x01, .. }));
}

#[test]
fn mf1_support_detect_reports_refusal_as_false() {
    let (dev, _link) = common::mock_device(|req: &Frame| {
        assert_eq!(req.command, 2001);
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_OK, &[])]
    });
    assert!(dev.positive().detect_mf1_support().unwrap());

    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::MF_ERRAUTH, &[])]
    });
    assert!(!dev.positive().detect_mf1_support().unwrap());

    let (dev, _link) = common::mock_device(|req: &Frame| {
        vec![common::fixtures::reply(req, StatusCode::HF_TAG_NO, &[])]
    });
    let err = dev.positive().detect_mf1_support().unwrap_err();
    assert_eq!(err.status(), Some(0x01));
}

#[test]
fn slot_management_checks_device_status() {
    let (dev, link) = common::mock_device(|req: &Frame| {
        let status = if req.payload.first() == Some(&7) {
            StatusCode::STATUS_PAR_ERR
        } else {
            StatusCode::STATUS_DEVICE_SUCCESS
        };
        vec![common::fixtures::reply(req, status, &[])]
    });
    let p = dev.positive();
    p.set_slot_activated(1).unwrap();
    p.set_slot_enable(2, false).unwrap();
    p.update_slot_data_config().unwrap();
    match p.set_slot_activated(8) {
        Err(Error::NegativeResponse { status, message }) => {
            assert_eq!(status, 0x60);
            assert_eq!(message, "invalid command parameter");
        }
        other => panic!("expected NegativeResponse, got: {:?}", other),
    }
    let ids: Vec<u16> = link.written_frames().iter().map(|f| f.command).collect();
    assert_eq!(ids, vec![1003, 1006, 1009, 1003]);
}
