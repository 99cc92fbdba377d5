// chameleon-rs/libchameleon/src/protocol/command_id.rs

use derive_more::Display;

use crate::protocol::status::StatusCode;

const DEVICE_OK: &[StatusCode] = &[StatusCode::STATUS_DEVICE_SUCCESS];
const HF_OK: &[StatusCode] = &[StatusCode::HF_TAG_OK];
const LF_OK: &[StatusCode] = &[StatusCode::LF_TAG_OK];
const AUTH_RESULT: &[StatusCode] = &[StatusCode::HF_TAG_OK, StatusCode::MF_ERRAUTH];
const NT_LEVEL_VERDICT: &[StatusCode] = &[
    StatusCode::HF_TAG_OK,
    StatusCode::NESTED_TAG_IS_STATIC,
    StatusCode::NESTED_TAG_IS_HARD,
];
const DARKSIDE_VERDICT: &[StatusCode] = &[
    StatusCode::HF_TAG_OK,
    StatusCode::DARKSIDE_CANT_FIXED_NT,
    StatusCode::DARKSIDE_LUCK_AUTH_OK,
    StatusCode::DARKSIDE_NACK_NO_SEND,
    StatusCode::DARKSIDE_TAG_CHANGED,
];

/// Numeric command ids understood by the device firmware.
///
/// Values are part of the wire contract and must not change.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandId {
    // device / app info, slot management
    GetAppVersion = 1000,
    ChangeMode = 1001,
    GetDeviceMode = 1002,
    SetSlotActivated = 1003,
    SetSlotTagType = 1004,
    SetSlotDataDefault = 1005,
    SetSlotEnable = 1006,
    SetSlotTagNick = 1007,
    GetSlotTagNick = 1008,
    SlotDataConfigSave = 1009,
    EnterBootloader = 1010,
    GetDeviceChipId = 1011,
    GetDeviceAddress = 1012,

    // ISO14443-A reader / MIFARE Classic attacks
    Scan14aTag = 2000,
    Mf1SupportDetect = 2001,
    Mf1NtLevelDetect = 2002,
    Mf1DarksideDetect = 2003,
    Mf1DarksideAcquire = 2004,
    Mf1NtDistDetect = 2005,
    Mf1NestedAcquire = 2006,
    Mf1CheckOneKeyBlock = 2007,
    Mf1ReadOneBlock = 2008,
    Mf1WriteOneBlock = 2009,

    // EM410x reader
    ScanEm410xTag = 3000,
    WriteEm410xToT5577 = 3001,

    // MIFARE Classic emulation
    LoadMf1BlockData = 4000,
    SetMf1AntiCollisionRes = 4001,

    // EM410x emulation, detection log
    SetEm410xEmuId = 5000,
    SetMf1DetectionEnable = 5003,
    GetMf1DetectionCount = 5004,
    GetMf1DetectionResult = 5005,
}

impl CommandId {
    pub const ALL: [CommandId; 31] = [
        Self::GetAppVersion,
        Self::ChangeMode,
        Self::GetDeviceMode,
        Self::SetSlotActivated,
        Self::SetSlotTagType,
        Self::SetSlotDataDefault,
        Self::SetSlotEnable,
        Self::SetSlotTagNick,
        Self::GetSlotTagNick,
        Self::SlotDataConfigSave,
        Self::EnterBootloader,
        Self::GetDeviceChipId,
        Self::GetDeviceAddress,
        Self::Scan14aTag,
        Self::Mf1SupportDetect,
        Self::Mf1NtLevelDetect,
        Self::Mf1DarksideDetect,
        Self::Mf1DarksideAcquire,
        Self::Mf1NtDistDetect,
        Self::Mf1NestedAcquire,
        Self::Mf1CheckOneKeyBlock,
        Self::Mf1ReadOneBlock,
        Self::Mf1WriteOneBlock,
        Self::ScanEm410xTag,
        Self::WriteEm410xToT5577,
        Self::LoadMf1BlockData,
        Self::SetMf1AntiCollisionRes,
        Self::SetEm410xEmuId,
        Self::SetMf1DetectionEnable,
        Self::GetMf1DetectionCount,
        Self::GetMf1DetectionResult,
    ];

    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    pub fn from_u16(id: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_u16() == id)
    }

    /// Status codes a reply to this command may carry and still count as
    /// success. Empty for commands the device never answers.
    pub fn acceptable_statuses(&self) -> &'static [StatusCode] {
        match self {
            Self::Scan14aTag
            | Self::Mf1DarksideAcquire
            | Self::Mf1NtDistDetect
            | Self::Mf1NestedAcquire
            | Self::Mf1ReadOneBlock
            | Self::Mf1WriteOneBlock => HF_OK,
            Self::Mf1NtLevelDetect => NT_LEVEL_VERDICT,
            Self::Mf1DarksideDetect => DARKSIDE_VERDICT,
            // a refused auth is an answer, not a failure
            Self::Mf1SupportDetect | Self::Mf1CheckOneKeyBlock => AUTH_RESULT,
            Self::ScanEm410xTag | Self::WriteEm410xToT5577 => LF_OK,
            Self::EnterBootloader => &[],
            _ => DEVICE_OK,
        }
    }
}

impl From<CommandId> for u16 {
    fn from(id: CommandId) -> Self {
        id.as_u16()
    }
}
