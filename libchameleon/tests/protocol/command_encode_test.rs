#[path = "../common/mod.rs"]
mod common;

use libchameleon::protocol::{Command, CommandId};
use libchameleon::types::{
    BlockAuth, DeviceMode, Em410xId, KeyType, MfKey, SenseType, SlotIndex, TagType,
};

fn slot(n: u8) -> SlotIndex {
    SlotIndex::new(n).unwrap()
}

#[test]
fn slot_commands_send_zero_based_index() {
    assert_eq!(Command::SetSlotActivated { slot: slot(1) }.encode(), vec![0]);
    assert_eq!(
        Command::SetSlotTagType {
            slot: slot(8),
            tag_type: TagType::Mifare1024,
        }
        .encode(),
        vec![7, 3]
    );
    assert_eq!(
        Command::SetSlotEnable {
            slot: slot(3),
            enable: true,
        }
        .encode(),
        vec![2, 1]
    );
    assert_eq!(
        Command::SetSlotTagNick {
            slot: slot(2),
            sense: SenseType::Hf,
            name: "ab".into(),
        }
        .encode(),
        vec![1, 2, b'a', b'b']
    );
    assert_eq!(
        Command::GetSlotTagNick {
            slot: slot(2),
            sense: SenseType::Lf,
        }
        .encode(),
        vec![1, 1]
    );
}

#[test]
fn change_mode_payload() {
    assert_eq!(
        Command::ChangeMode {
            mode: DeviceMode::Reader
        }
        .encode(),
        vec![1]
    );
    assert_eq!(
        Command::ChangeMode {
            mode: DeviceMode::Tag
        }
        .encode(),
        vec![0]
    );
}

#[test]
fn mifare_payloads_put_selectors_first() {
    let key = common::fixtures::sample_key();
    let known = BlockAuth::new(4, KeyType::B, key);

    assert_eq!(
        Command::Mf1DarksideAcquire {
            block: 3,
            key_type: KeyType::A,
            first_recover: true,
            sync_max: 30,
        }
        .encode(),
        vec![0x60, 3, 1, 30]
    );

    let mut expected = vec![0x61, 4];
    expected.extend_from_slice(key.as_bytes());
    assert_eq!(Command::Mf1NtDistDetect { known }.encode(), expected);

    let mut nested = expected.clone();
    nested.extend_from_slice(&[0x60, 8]);
    assert_eq!(
        Command::Mf1NestedAcquire {
            known,
            target_block: 8,
            target_type: KeyType::A,
        }
        .encode(),
        nested
    );

    let mut write = expected.clone();
    write.extend_from_slice(&common::fixtures::sample_block_bytes());
    assert_eq!(
        Command::Mf1WriteOneBlock {
            auth: known,
            data: common::fixtures::sample_block(),
        }
        .encode(),
        write
    );
}

#[test]
fn emulation_payloads() {
    let cmd = Command::load_mf1_block_data(4, &[0x5a; 32]).unwrap();
    let bytes = cmd.encode();
    assert_eq!(bytes.len(), 33);
    assert_eq!(bytes[0], 4);

    let cmd = Command::set_mf1_anti_collision_res(0x08, [0x04, 0x00], &[1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(cmd.encode(), vec![0x08, 0x04, 0x00, 1, 2, 3, 4, 5, 6, 7]);

    let id = common::fixtures::sample_em410x();
    assert_eq!(
        Command::SetEm410xEmuId { id }.encode(),
        common::fixtures::sample_em410x_bytes().to_vec()
    );
}

#[test]
fn t55xx_write_carries_id_then_keys() {
    let id = Em410xId::from_bytes([1, 2, 3, 4, 5]);
    let bytes = Command::WriteEm410xToT5577 { id }.encode();
    assert_eq!(&bytes[..5], &[1, 2, 3, 4, 5]);
    // new key and at least one old key, 4 bytes each
    assert!(bytes.len() >= 5 + 8);
    assert_eq!((bytes.len() - 5) % 4, 0);
}

#[test]
fn detection_log_index_is_big_endian() {
    assert_eq!(
        Command::GetMf1DetectionResult { index: 0x0102_0304 }.encode(),
        vec![0x01, 0x02, 0x03, 0x04]
    );
    assert_eq!(
        Command::SetMf1DetectionEnable { enable: true }.encode(),
        vec![1]
    );
}

#[test]
fn ids_match_catalogue() {
    let key = MfKey::DEFAULT;
    assert_eq!(
        Command::Mf1CheckOneKeyBlock {
            auth: BlockAuth::new(0, KeyType::A, key)
        }
        .id(),
        CommandId::Mf1CheckOneKeyBlock
    );
    assert_eq!(Command::GetMf1DetectionCount.id().as_u16(), 5004);
    assert_eq!(Command::SlotDataConfigSave.id().as_u16(), 1009);
    assert_eq!(Command::EnterBootloader.id().as_u16(), 1010);
}
