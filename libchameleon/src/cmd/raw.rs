// chameleon-rs/libchameleon/src/cmd/raw.rs

use crate::Result;
use crate::device::Device;
use crate::protocol::{Command, Frame};
use crate::types::{
    BlockAuth, BlockData, DeviceMode, Em410xId, KeyType, MfKey, SenseType, SlotIndex, TagType,
};

/// Raw call style. Arguments are validated locally, so a rejected call
/// writes nothing; the reply status is left for the caller to judge.
#[derive(Clone, Copy)]
pub struct ChameleonCmd<'a> {
    device: &'a Device,
}

impl<'a> ChameleonCmd<'a> {
    pub fn new(device: &'a Device) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &'a Device {
        self.device
    }

    fn run(&self, cmd: Command) -> Result<Frame> {
        self.device.execute(&cmd)
    }

    fn auth(block: u8, key_type: KeyType, key: &[u8]) -> Result<BlockAuth> {
        Ok(BlockAuth::new(block, key_type, MfKey::try_from(key)?))
    }

    pub fn get_app_version(&self) -> Result<Frame> {
        self.run(Command::GetAppVersion)
    }

    /// Switch between reader mode (`true`) and tag emulation (`false`).
    pub fn set_reader_device_mode(&self, reader: bool) -> Result<Frame> {
        let mode = if reader {
            DeviceMode::Reader
        } else {
            DeviceMode::Tag
        };
        self.run(Command::ChangeMode { mode })
    }

    pub fn is_reader_device_mode(&self) -> Result<Frame> {
        self.run(Command::GetDeviceMode)
    }

    pub fn set_slot_activated(&self, slot: u8) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::SetSlotActivated { slot })
    }

    pub fn set_slot_tag_type(&self, slot: u8, tag_type: TagType) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::SetSlotTagType { slot, tag_type })
    }

    /// Reset a slot's data to the factory content for `tag_type`.
    pub fn set_slot_data_default(&self, slot: u8, tag_type: TagType) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::SetSlotDataDefault { slot, tag_type })
    }

    pub fn set_slot_enable(&self, slot: u8, enable: bool) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::SetSlotEnable { slot, enable })
    }

    pub fn set_slot_tag_nick_name(&self, slot: u8, sense: SenseType, name: &str) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::SetSlotTagNick {
            slot,
            sense,
            name: name.to_string(),
        })
    }

    pub fn get_slot_tag_nick_name(&self, slot: u8, sense: SenseType) -> Result<Frame> {
        let slot = SlotIndex::new(slot)?;
        self.run(Command::GetSlotTagNick { slot, sense })
    }

    /// Persist slot configuration to the device's flash.
    pub fn update_slot_data_config(&self) -> Result<Frame> {
        self.run(Command::SlotDataConfigSave)
    }

    /// Reboot into the bootloader. The device answers nothing and the
    /// connection is closed afterwards.
    pub fn enter_dfu_mode(&self) -> Result<()> {
        self.device.send_only(&Command::EnterBootloader)
    }

    pub fn get_device_chip_id(&self) -> Result<Frame> {
        self.run(Command::GetDeviceChipId)
    }

    pub fn get_device_address(&self) -> Result<Frame> {
        self.run(Command::GetDeviceAddress)
    }

    pub fn scan_tag_14a(&self) -> Result<Frame> {
        self.run(Command::Scan14aTag)
    }

    pub fn detect_mf1_support(&self) -> Result<Frame> {
        self.run(Command::Mf1SupportDetect)
    }

    pub fn detect_mf1_nt_level(&self) -> Result<Frame> {
        self.run(Command::Mf1NtLevelDetect)
    }

    pub fn detect_darkside_support(&self) -> Result<Frame> {
        self.run(Command::Mf1DarksideDetect)
    }

    pub fn acquire_darkside(
        &self,
        block: u8,
        key_type: KeyType,
        first_recover: bool,
        sync_max: u8,
    ) -> Result<Frame> {
        self.run(Command::Mf1DarksideAcquire {
            block,
            key_type,
            first_recover,
            sync_max,
        })
    }

    pub fn detect_nt_distance(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<Frame> {
        let known = Self::auth(block, key_type, key)?;
        self.run(Command::Mf1NtDistDetect { known })
    }

    pub fn acquire_nested(
        &self,
        block: u8,
        key_type: KeyType,
        key: &[u8],
        target_block: u8,
        target_type: KeyType,
    ) -> Result<Frame> {
        let known = Self::auth(block, key_type, key)?;
        self.run(Command::Mf1NestedAcquire {
            known,
            target_block,
            target_type,
        })
    }

    pub fn auth_mf1_key(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<Frame> {
        let auth = Self::auth(block, key_type, key)?;
        self.run(Command::Mf1CheckOneKeyBlock { auth })
    }

    pub fn read_mf1_block(&self, block: u8, key_type: KeyType, key: &[u8]) -> Result<Frame> {
        let auth = Self::auth(block, key_type, key)?;
        self.run(Command::Mf1ReadOneBlock { auth })
    }

    pub fn write_mf1_block(
        &self,
        block: u8,
        key_type: KeyType,
        key: &[u8],
        data: &[u8],
    ) -> Result<Frame> {
        let auth = Self::auth(block, key_type, key)?;
        let data = BlockData::try_from(data)?;
        self.run(Command::Mf1WriteOneBlock { auth, data })
    }

    pub fn read_em_410x(&self) -> Result<Frame> {
        self.run(Command::ScanEm410xTag)
    }

    pub fn write_em_410x_to_t55xx(&self, id: &[u8]) -> Result<Frame> {
        let id = Em410xId::try_from(id)?;
        self.run(Command::WriteEm410xToT5577 { id })
    }

    /// Upload emulated MIFARE Classic content starting at `start_block`.
    pub fn set_mf1_block_data(&self, start_block: u8, data: &[u8]) -> Result<Frame> {
        self.run(Command::load_mf1_block_data(start_block, data)?)
    }

    pub fn set_mf1_anti_collision_res(&self, sak: u8, atqa: [u8; 2], uid: &[u8]) -> Result<Frame> {
        self.run(Command::set_mf1_anti_collision_res(sak, atqa, uid)?)
    }

    pub fn set_em410x_sim_id(&self, id: &[u8]) -> Result<Frame> {
        let id = Em410xId::try_from(id)?;
        self.run(Command::SetEm410xEmuId { id })
    }

    pub fn set_mf1_detection_enable(&self, enable: bool) -> Result<Frame> {
        self.run(Command::SetMf1DetectionEnable { enable })
    }

    pub fn get_mf1_detection_count(&self) -> Result<Frame> {
        self.run(Command::GetMf1DetectionCount)
    }

    pub fn get_mf1_detection_log(&self, index: u32) -> Result<Frame> {
        self.run(Command::GetMf1DetectionResult { index })
    }
}
