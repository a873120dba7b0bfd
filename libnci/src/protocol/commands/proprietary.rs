// libnci/src/protocol/commands/proprietary.rs

/// NCI_PROPRIETARY_ACT_CMD has an empty payload (PN7150 datasheet, 5.4)
pub fn encode_proprietary_act() -> Vec<u8> {
    Vec::new()
}
