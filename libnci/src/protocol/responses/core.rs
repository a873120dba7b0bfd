// libnci/src/protocol/responses/core.rs

use crate::constants::{CORE_RESET_RSP_LEN, oid};
use crate::protocol::parser::byte_at;
use crate::types::{GroupId, Status};
use crate::Result;

/// Fields of a CORE_RESET_RSP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreResetInfo {
    pub status: Status,
    /// Major version in the high nibble, minor in the low nibble
    pub nci_version: u8,
    /// 0x00 = configuration kept, 0x01 = configuration reset
    pub config_status: u8,
}

impl CoreResetInfo {
    pub fn version_major(&self) -> u8 {
        self.nci_version >> 4
    }

    pub fn version_minor(&self) -> u8 {
        self.nci_version & 0x0F
    }
}

/// Validate and decode a CORE_RESET_RSP (exactly 6 bytes, STATUS_OK).
pub fn decode_core_reset(frame: &[u8]) -> Result<CoreResetInfo> {
    super::expect_ok(frame, GroupId::Core, oid::core::RESET, Some(CORE_RESET_RSP_LEN))?;
    Ok(CoreResetInfo {
        status: Status::new(byte_at(frame, 3)?),
        nci_version: byte_at(frame, 4)?,
        config_status: byte_at(frame, 5)?,
    })
}
