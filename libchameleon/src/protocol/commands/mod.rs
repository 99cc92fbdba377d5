// chameleon-rs/libchameleon/src/protocol/commands/mod.rs

pub mod device;
pub mod em410x;
pub mod mifare;
pub mod slot;

pub use device::encode_change_mode;
pub use em410x::{encode_emu_id, encode_write_t55xx};
pub use mifare::{
    encode_anti_collision, encode_block_auth, encode_darkside_acquire, encode_detection_enable,
    encode_detection_log, encode_load_block_data, encode_nested_acquire, encode_write_block,
};
use mifare::{check_block_data, check_uid, layout_anti_collision, layout_load_block_data};
pub use slot::{
    encode_get_slot_nick, encode_set_slot_nick, encode_slot_activated, encode_slot_enable,
    encode_slot_tag_type,
};

use std::time::Duration;

use crate::protocol::command_id::CommandId;
use crate::protocol::status::StatusCode;
use crate::types::{
    BlockAuth, BlockData, DeviceMode, Em410xId, KeyType, SenseType, SlotIndex, TagType,
};
use crate::utils::timeout;

/// High-level Command enum. New commands should be added here and their
/// payload encoder placed in `protocol::commands::<group>.rs`.
///
/// Variants hold already-validated values, so encoding cannot fail. Use the
/// fallible constructors for commands whose payload has extra constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GetAppVersion,
    ChangeMode {
        mode: DeviceMode,
    },
    GetDeviceMode,
    SetSlotActivated {
        slot: SlotIndex,
    },
    SetSlotTagType {
        slot: SlotIndex,
        tag_type: TagType,
    },
    SetSlotDataDefault {
        slot: SlotIndex,
        tag_type: TagType,
    },
    SetSlotEnable {
        slot: SlotIndex,
        enable: bool,
    },
    SetSlotTagNick {
        slot: SlotIndex,
        sense: SenseType,
        name: String,
    },
    GetSlotTagNick {
        slot: SlotIndex,
        sense: SenseType,
    },
    SlotDataConfigSave,
    EnterBootloader,
    GetDeviceChipId,
    GetDeviceAddress,
    Scan14aTag,
    Mf1SupportDetect,
    Mf1NtLevelDetect,
    Mf1DarksideDetect,
    Mf1DarksideAcquire {
        block: u8,
        key_type: KeyType,
        first_recover: bool,
        sync_max: u8,
    },
    Mf1NtDistDetect {
        known: BlockAuth,
    },
    Mf1NestedAcquire {
        known: BlockAuth,
        target_block: u8,
        target_type: KeyType,
    },
    Mf1CheckOneKeyBlock {
        auth: BlockAuth,
    },
    Mf1ReadOneBlock {
        auth: BlockAuth,
    },
    Mf1WriteOneBlock {
        auth: BlockAuth,
        data: BlockData,
    },
    ScanEm410xTag,
    WriteEm410xToT5577 {
        id: Em410xId,
    },
    LoadMf1BlockData {
        start_block: u8,
        data: Vec<u8>,
    },
    SetMf1AntiCollisionRes {
        sak: u8,
        atqa: [u8; 2],
        uid: Vec<u8>,
    },
    SetEm410xEmuId {
        id: Em410xId,
    },
    SetMf1DetectionEnable {
        enable: bool,
    },
    GetMf1DetectionCount,
    GetMf1DetectionResult {
        index: u32,
    },
}

impl Command {
    /// Build a LoadMf1BlockData command, checking the data is whole blocks.
    pub fn load_mf1_block_data(start_block: u8, data: &[u8]) -> crate::Result<Self> {
        check_block_data(data)?;
        Ok(Self::LoadMf1BlockData {
            start_block,
            data: data.to_vec(),
        })
    }

    /// Build a SetMf1AntiCollisionRes command, checking the UID length.
    pub fn set_mf1_anti_collision_res(sak: u8, atqa: [u8; 2], uid: &[u8]) -> crate::Result<Self> {
        check_uid(uid)?;
        Ok(Self::SetMf1AntiCollisionRes {
            sak,
            atqa,
            uid: uid.to_vec(),
        })
    }

    /// Command id sent in the frame header.
    pub fn id(&self) -> CommandId {
        match self {
            Self::GetAppVersion => CommandId::GetAppVersion,
            Self::ChangeMode { .. } => CommandId::ChangeMode,
            Self::GetDeviceMode => CommandId::GetDeviceMode,
            Self::SetSlotActivated { .. } => CommandId::SetSlotActivated,
            Self::SetSlotTagType { .. } => CommandId::SetSlotTagType,
            Self::SetSlotDataDefault { .. } => CommandId::SetSlotDataDefault,
            Self::SetSlotEnable { .. } => CommandId::SetSlotEnable,
            Self::SetSlotTagNick { .. } => CommandId::SetSlotTagNick,
            Self::GetSlotTagNick { .. } => CommandId::GetSlotTagNick,
            Self::SlotDataConfigSave => CommandId::SlotDataConfigSave,
            Self::EnterBootloader => CommandId::EnterBootloader,
            Self::GetDeviceChipId => CommandId::GetDeviceChipId,
            Self::GetDeviceAddress => CommandId::GetDeviceAddress,
            Self::Scan14aTag => CommandId::Scan14aTag,
            Self::Mf1SupportDetect => CommandId::Mf1SupportDetect,
            Self::Mf1NtLevelDetect => CommandId::Mf1NtLevelDetect,
            Self::Mf1DarksideDetect => CommandId::Mf1DarksideDetect,
            Self::Mf1DarksideAcquire { .. } => CommandId::Mf1DarksideAcquire,
            Self::Mf1NtDistDetect { .. } => CommandId::Mf1NtDistDetect,
            Self::Mf1NestedAcquire { .. } => CommandId::Mf1NestedAcquire,
            Self::Mf1CheckOneKeyBlock { .. } => CommandId::Mf1CheckOneKeyBlock,
            Self::Mf1ReadOneBlock { .. } => CommandId::Mf1ReadOneBlock,
            Self::Mf1WriteOneBlock { .. } => CommandId::Mf1WriteOneBlock,
            Self::ScanEm410xTag => CommandId::ScanEm410xTag,
            Self::WriteEm410xToT5577 { .. } => CommandId::WriteEm410xToT5577,
            Self::LoadMf1BlockData { .. } => CommandId::LoadMf1BlockData,
            Self::SetMf1AntiCollisionRes { .. } => CommandId::SetMf1AntiCollisionRes,
            Self::SetEm410xEmuId { .. } => CommandId::SetEm410xEmuId,
            Self::SetMf1DetectionEnable { .. } => CommandId::SetMf1DetectionEnable,
            Self::GetMf1DetectionCount => CommandId::GetMf1DetectionCount,
            Self::GetMf1DetectionResult { .. } => CommandId::GetMf1DetectionResult,
        }
    }

    /// Encode the command payload (everything after the frame header).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ChangeMode { mode } => encode_change_mode(*mode),
            Self::SetSlotActivated { slot } => encode_slot_activated(*slot),
            Self::SetSlotTagType { slot, tag_type }
            | Self::SetSlotDataDefault { slot, tag_type } => {
                encode_slot_tag_type(*slot, *tag_type)
            }
            Self::SetSlotEnable { slot, enable } => encode_slot_enable(*slot, *enable),
            Self::SetSlotTagNick { slot, sense, name } => encode_set_slot_nick(*slot, *sense, name),
            Self::GetSlotTagNick { slot, sense } => encode_get_slot_nick(*slot, *sense),
            Self::Mf1DarksideAcquire {
                block,
                key_type,
                first_recover,
                sync_max,
            } => encode_darkside_acquire(*block, *key_type, *first_recover, *sync_max),
            Self::Mf1NtDistDetect { known } => encode_block_auth(known),
            Self::Mf1NestedAcquire {
                known,
                target_block,
                target_type,
            } => encode_nested_acquire(known, *target_block, *target_type),
            Self::Mf1CheckOneKeyBlock { auth } | Self::Mf1ReadOneBlock { auth } => {
                encode_block_auth(auth)
            }
            Self::Mf1WriteOneBlock { auth, data } => encode_write_block(auth, data),
            Self::WriteEm410xToT5577 { id } => encode_write_t55xx(id),
            Self::LoadMf1BlockData { start_block, data } => {
                layout_load_block_data(*start_block, data)
            }
            Self::SetMf1AntiCollisionRes { sak, atqa, uid } => {
                layout_anti_collision(*sak, *atqa, uid)
            }
            Self::SetEm410xEmuId { id } => encode_emu_id(id),
            Self::SetMf1DetectionEnable { enable } => encode_detection_enable(*enable),
            Self::GetMf1DetectionResult { index } => encode_detection_log(*index),
            Self::GetAppVersion
            | Self::GetDeviceMode
            | Self::SlotDataConfigSave
            | Self::EnterBootloader
            | Self::GetDeviceChipId
            | Self::GetDeviceAddress
            | Self::Scan14aTag
            | Self::Mf1SupportDetect
            | Self::Mf1NtLevelDetect
            | Self::Mf1DarksideDetect
            | Self::ScanEm410xTag
            | Self::GetMf1DetectionCount => Vec::new(),
        }
    }

    /// Timeout override for commands that keep the device busy longer than
    /// an ordinary exchange. `None` means the connection default.
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Mf1DarksideDetect => Some(timeout::ms(timeout::DARKSIDE_DETECT_TIMEOUT_MS)),
            Self::Mf1DarksideAcquire { sync_max, .. } => {
                Some(timeout::darkside_acquire_timeout(*sync_max))
            }
            _ => None,
        }
    }

    /// `false` for commands the device cannot answer (it reboots first).
    pub fn expects_reply(&self) -> bool {
        !matches!(self, Self::EnterBootloader)
    }

    /// Status codes the checked call style treats as success.
    pub fn acceptable_statuses(&self) -> &'static [StatusCode] {
        self.id().acceptable_statuses()
    }
}
