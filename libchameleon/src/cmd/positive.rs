// chameleon-rs/libchameleon/src/cmd/positive.rs

use crate::cmd::raw::ChameleonCmd;
use crate::device::Device;
use crate::protocol::responses;
use crate::protocol::{CommandId, Frame, StatusCode, classify};
use crate::types::{BlockData, DeviceMode, Em410xId, KeyType, NtLevel, SenseType, TagType};
use crate::{Error, Result};

/// Checked call style: every operation fails with
/// [`Error::NegativeResponse`] unless the device reports success, and
/// replies with a known layout are decoded.
#[derive(Clone, Copy)]
pub struct PositiveCmd<'a> {
    raw: ChameleonCmd<'a>,
}

impl<'a> PositiveCmd<'a> {
    pub fn new(device: &'a Device) -> Self {
        Self {
            raw: ChameleonCmd::new(device),
        }
    }

    /// The unchecked style over the same connection.
    pub fn raw(&self) -> ChameleonCmd<'a> {
        self.raw
    }

    /// Accept `frame` only if its status is in its command's success set.
    fn check(frame: Frame) -> Result<Frame> {
        let id = CommandId::from_u16(frame.command).ok_or_else(|| {
            Error::FrameFormat(format!("reply for unknown command {}", frame.command))
        })?;
        classify(frame.status_code(), id.acceptable_statuses())?;
        Ok(frame)
    }

    /// Firmware version, e.g. `0x0102` for 1.2.
    pub fn get_app_version(&self) -> Result<u32> {
        let frame = Self::check(self.raw.get_app_version()?)?;
        responses::decode_app_version(&frame.payload)
    }

    pub fn set_reader_device_mode(&self, reader: bool) -> Result<Frame> {
        Self::check(self.raw.set_reader_device_mode(reader)?)
    }

    pub fn is_reader_device_mode(&self) -> Result<bool> {
        let frame = Self::check(self.raw.is_reader_device_mode()?)?;
        Ok(responses::decode_device_mode(&frame.payload)? == DeviceMode::Reader)
    }

    pub fn set_slot_activated(&self, slot: u8) -> Result<Frame> {
        Self::check(self.raw.set_slot_activated(slot)?)
    }

    pub fn set_slot_tag_type(&self, slot: u8, tag_type: TagType) -> Result<Frame> {
        Self::check(self.raw.set_slot_tag_type(slot, tag_type)?)
    }

    pub fn set_slot_data_default(&self, slot: u8, tag_type: TagType) -> Result<Frame> {
        Self::check(self.raw.set_slot_data_default(slot, tag_type)?)
    }

    pub fn set_slot_enable(&self, slot: u8, enable: bool) -> Result<Frame> {
        Self::check(self.raw.set_slot_enable(slot, enable)?)
    }

    pub fn set_slot_tag_nick_name(&self, slot: u8, sense: SenseType, name: &str) -> Result<Frame> {
        Self::check(self.raw.set_slot_tag_nick_name(slot, sense, name)?)
    }

    pub fn get_slot_tag_nick_name(&self, slot: u8, sense: SenseType) -> Result<String> {
        let frame = Self::check(self.raw.get_slot_tag_nick_name(slot, sense)?)?;
        Ok(responses::decode_nick_name(&frame.payload))
    }

    pub fn update_slot_data_config(&self) -> Result<Frame> {
        Self::check(self.raw.update_slot_data_config()?)
    }

    /// Nothing to check: the device reboots without answering.
    pub fn enter_dfu_mode(&self) -> Result<()> {
        self.raw.enter_dfu_mode()
    }

    pub fn get_device_chip_id(&self) -> Result<String> {
        let frame = Self::check(self.raw.get_device_chip_id()?)?;
        Ok(responses::decode_chip_id(&frame.payload))
    }

    pub fn get_device_address(&self) -> Result<String> {
        let frame = Self::check(self.raw.get_device_address()?)?;
        Ok(responses::decode_device_address(&frame.payload))
    }

    pub fn scan_tag_14a(&self) -> Result<Frame> {
        Self::check(self.raw.scan_tag_14a()?)
    }

    /// `true` for a MIFARE Classic tag, `false` if the tag refused auth.
    pub fn detect_mf1_support(&self) -> Result<bool> {
        let frame = Self::check(self.raw.detect_mf1_support()?)?;
        Ok(frame.status_code() == StatusCode::HF_TAG_OK)
    }

    pub fn detect_mf1_nt_level(&self) -> Result<NtLevel> {
        let frame = Self::check(self.raw.detect_mf1_nt_level()?)?;
        Ok(match frame.status_code() {
            StatusCode::NESTED_TAG_IS_STATIC => NtLevel::Static,
            StatusCode::NESTED_TAG_IS_HARD => NtLevel::Hard,
            _ => NtLevel::Weak,
        })
    }

    /// The status of the returned frame is the darkside verdict.
    pub fn detect_darkside_support(&self) -> Result<Frame> {
        Self::check(self.raw.detect_darkside_support()?)
    }

    pub fn acquire_darkside(
        &self,
        block: u8,
        key_type: KeyType,
        first_recover: bool,
        sync_max: u8,
    ) -> Result<Frame> {
        Self::check(
            self.raw
                .acquire_darkside(block, key_type, first_recover, sync_max)?,
        )
    }

    pub fn detect_nt_distance(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<Frame> {
        Self::check(self.raw.detect_nt_distance(block, key_type, key)?)
    }

    pub fn acquire_nested(
        &self,
        block: u8,
        key_type: KeyType,
        key: &[u8],
        target_block: u8,
        target_type: KeyType,
    ) -> Result<Frame> {
        Self::check(
            self.raw
                .acquire_nested(block, key_type, key, target_block, target_type)?,
        )
    }

    /// `true` if the key opens the block, `false` if the tag refused it.
    pub fn auth_mf1_key(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<bool> {
        let frame = Self::check(self.raw.auth_mf1_key(block, key_type, key)?)?;
        Ok(frame.status_code() == StatusCode::HF_TAG_OK)
    }

    pub fn read_mf1_block(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<BlockData> {
        let frame = Self::check(self.raw.read_mf1_block(block, key_type, key)?)?;
        responses::decode_block(&frame.payload)
    }

    pub fn write_mf1_block(
        &self,
        block: u8,
        key_type: KeyType,
        key: &[u8],
        data: &[u8],
    ) -> Result<Frame> {
        Self::check(self.raw.write_mf1_block(block, key_type, key, data)?)
    }

    pub fn read_em_410x(&self) -> Result<Em410xId> {
        let frame = Self::check(self.raw.read_em_410x()?)?;
        responses::decode_em410x_id(&frame.payload)
    }

    pub fn write_em_410x_to_t55xx(&self, id: &[u8]) -> Result<Frame> {
        Self::check(self.raw.write_em_410x_to_t55xx(id)?)
    }

    pub fn set_mf1_block_data(&self, start_block: u8, data: &[u8]) -> Result<Frame> {
        Self::check(self.raw.set_mf1_block_data(start_block, data)?)
    }

    pub fn set_mf1_anti_collision_res(&self, sak: u8, atqa: [u8; 2], uid: &[u8]) -> Result<Frame> {
        Self::check(self.raw.set_mf1_anti_collision_res(sak, atqa, uid)?)
    }

    pub fn set_em410x_sim_id(&self, id: &[u8]) -> Result<Frame> {
        Self::check(self.raw.set_em410x_sim_id(id)?)
    }

    pub fn set_mf1_detection_enable(&self, enable: bool) -> Result<Frame> {
        Self::check(self.raw.set_mf1_detection_enable(enable)?)
    }

    pub fn get_mf1_detection_count(&self) -> Result<u32> {
        let frame = Self::check(self.raw.get_mf1_detection_count()?)?;
        responses::decode_detection_count(&frame.payload)
    }

    pub fn get_mf1_detection_log(&self, index: u32) -> Result<Frame> {
        Self::check(self.raw.get_mf1_detection_log(index)?)
    }
}
