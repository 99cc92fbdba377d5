// chameleon-rs/libchameleon/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod command_id;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use checksum::lrc;
pub use codec::FrameDecoder;
pub use command_id::CommandId;
pub use commands::Command;
pub use frame::{Decoded, Frame};
pub use status::{classify, StatusCode, Subsystem};
