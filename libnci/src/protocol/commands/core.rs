// libnci/src/protocol/commands/core.rs

use crate::types::ResetType;

/// CORE_RESET_CMD payload: [reset type]
pub fn encode_core_reset(reset_type: ResetType) -> Vec<u8> {
    vec![reset_type as u8]
}

/// CORE_INIT_CMD carries no payload in NCI 1.0
pub fn encode_core_init() -> Vec<u8> {
    Vec::new()
}
