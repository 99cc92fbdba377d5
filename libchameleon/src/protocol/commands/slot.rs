// chameleon-rs/libchameleon/src/protocol/commands/slot.rs

use crate::types::{SenseType, SlotIndex, TagType};

/// Encode SetSlotActivated payload (command 1003): slot(1)
pub fn encode_slot_activated(slot: SlotIndex) -> Vec<u8> {
    vec![slot.wire_index()]
}

/// Encode SetSlotTagType / SetSlotDataDefault payload (commands 1004, 1005):
/// slot(1) tag_type(1)
pub fn encode_slot_tag_type(slot: SlotIndex, tag_type: TagType) -> Vec<u8> {
    vec![slot.wire_index(), tag_type as u8]
}

/// Encode SetSlotEnable payload (command 1006): slot(1) enable(1)
pub fn encode_slot_enable(slot: SlotIndex, enable: bool) -> Vec<u8> {
    vec![slot.wire_index(), u8::from(enable)]
}

/// Encode SetSlotTagNick payload (command 1007): slot(1) sense(1) name(n)
///
/// The slot goes out 0-based like every other slot command. Some host tools
/// send the printed slot number unchanged for 1007 and 1008, which the
/// firmware reads as the next slot up.
pub fn encode_set_slot_nick(slot: SlotIndex, sense: SenseType, name: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + name.len());
    buf.push(slot.wire_index());
    buf.push(sense as u8);
    buf.extend_from_slice(name.as_bytes());
    buf
}

/// Encode GetSlotTagNick payload (command 1008): slot(1) sense(1)
///
/// Slot numbering as for [`encode_set_slot_nick`].
pub fn encode_get_slot_nick(slot: SlotIndex, sense: SenseType) -> Vec<u8> {
    vec![slot.wire_index(), sense as u8]
}
