// chameleon-rs/libchameleon/src/constants.rs
//! Common protocol constants used across the crate

/// Start-of-frame marker
pub const FRAME_SOF: u8 = 0x11;

/// LRC of the start-of-frame byte; always the second byte on the wire.
pub const FRAME_SOF_LRC: u8 = 0xEF;

/// SOF(1) + LRC1(1) + CMD(2) + STATUS(2) + LEN(2) + LRC2(1)
pub const FRAME_HEADER_LEN: usize = 9;

/// Header plus the trailing LRC3 byte, i.e. the size of an empty frame
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + 1;

/// Maximum payload length representable in the 16-bit length field
pub const FRAME_MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Number of emulation slots on the device
pub const SLOT_COUNT: u8 = 8;

/// Length of a MIFARE Classic block
pub const MF1_BLOCK_LEN: usize = 16;

/// Length of a MIFARE Classic sector key
pub const MF1_KEY_LEN: usize = 6;

/// Length of an EM410x card id
pub const EM410X_ID_LEN: usize = 5;

/// T55xx password written alongside an EM410x id
pub const T55XX_NEW_KEY: [u8; 4] = [0x20, 0x20, 0x66, 0x66];

/// T55xx passwords tried when the target is already protected
pub const T55XX_OLD_KEYS: [[u8; 4]; 2] = [[0x51, 0x24, 0x36, 0x48], [0x19, 0x92, 0x04, 0x27]];

/// Default serial baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
