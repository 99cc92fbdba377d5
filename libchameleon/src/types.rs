// chameleon-rs/libchameleon/src/types.rs

use crate::constants::{EM410X_ID_LEN, MF1_BLOCK_LEN, MF1_KEY_LEN, SLOT_COUNT};
use crate::Error;
use derive_more::Display;

/// Emulation slot number as printed on the device, 1..=8.
///
/// The wire carries the 0-based index; see [`SlotIndex::wire_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "slot {}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub fn new(slot: u8) -> crate::Result<Self> {
        if !(1..=SLOT_COUNT).contains(&slot) {
            return Err(Error::InvalidArgument(format!(
                "slot index {} out of range (1-{})",
                slot, SLOT_COUNT
            )));
        }
        Ok(Self(slot))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn wire_index(&self) -> u8 {
        self.0 - 1
    }
}

/// Tag type emulated by a slot
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    Unknown = 0,
    Em410x = 1,
    MifareMini = 2,
    Mifare1024 = 3,
    Mifare2048 = 4,
    Mifare4096 = 5,
    Ntag213 = 6,
    Ntag215 = 7,
    Ntag216 = 8,
}

impl TagType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::Em410x),
            2 => Some(Self::MifareMini),
            3 => Some(Self::Mifare1024),
            4 => Some(Self::Mifare2048),
            5 => Some(Self::Mifare4096),
            6 => Some(Self::Ntag213),
            7 => Some(Self::Ntag215),
            8 => Some(Self::Ntag216),
            _ => None,
        }
    }

    /// Field the tag type answers on.
    pub fn sense_type(&self) -> SenseType {
        match self {
            Self::Unknown => SenseType::None,
            Self::Em410x => SenseType::Lf,
            _ => SenseType::Hf,
        }
    }

    /// All concrete tag types, i.e. everything except `Unknown`.
    pub fn all() -> &'static [TagType] {
        &[
            Self::Em410x,
            Self::MifareMini,
            Self::Mifare1024,
            Self::Mifare2048,
            Self::Mifare4096,
            Self::Ntag213,
            Self::Ntag215,
            Self::Ntag216,
        ]
    }
}

/// Field type a slot identity is bound to
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SenseType {
    None = 0,
    /// 125 kHz
    Lf = 1,
    /// 13.56 MHz
    Hf = 2,
}

/// MIFARE Classic authentication key selector
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    A = 0x60,
    B = 0x61,
}

/// Device operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceMode {
    /// Emulating tags
    Tag,
    /// Reading real tags
    Reader,
}

impl DeviceMode {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Tag => 0,
            Self::Reader => 1,
        }
    }
}

/// Tag nonce generator class reported by nt-level detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NtLevel {
    /// Predictable PRNG, nested attack applies
    Weak,
    /// Same nonce on every auth
    Static,
    /// Hardened PRNG
    Hard,
}

/// MIFARE Classic sector key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MfKey([u8; MF1_KEY_LEN]);

impl MfKey {
    /// Factory default key FFFFFFFFFFFF
    pub const DEFAULT: Self = Self([0xff; MF1_KEY_LEN]);

    pub fn from_bytes(bytes: [u8; MF1_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MF1_KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MfKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed::<MF1_KEY_LEN>(bytes)?))
    }
}

/// EM410x card id (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Em410xId([u8; EM410X_ID_LEN]);

impl Em410xId {
    pub fn from_bytes(bytes: [u8; EM410X_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; EM410X_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Em410xId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed::<EM410X_ID_LEN>(bytes)?))
    }
}

/// MIFARE Classic block (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; MF1_BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MF1_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MF1_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(fixed::<MF1_BLOCK_LEN>(bytes)?))
    }
}

/// Target of a MIFARE Classic operation: which block, authenticated with
/// which key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAuth {
    pub block: u8,
    pub key_type: KeyType,
    pub key: MfKey,
}

impl BlockAuth {
    pub fn new(block: u8, key_type: KeyType, key: MfKey) -> Self {
        Self {
            block,
            key_type,
            key,
        }
    }

    /// type(1) block(1) key(6), the prefix shared by every keyed MIFARE command
    pub fn encode(&self) -> [u8; 2 + MF1_KEY_LEN] {
        let mut out = [0u8; 2 + MF1_KEY_LEN];
        out[0] = self.key_type as u8;
        out[1] = self.block;
        out[2..].copy_from_slice(self.key.as_bytes());
        out
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> crate::Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}
