// libnci/src/protocol/notifications/deactivation.rs

use crate::protocol::parser::byte_at;
use crate::Result;

/// RF_DEACTIVATE_NTF fields: deactivation type and reason (NCI Table 64)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeactivationInfo {
    pub mode: u8,
    /// 0x00 DH request, 0x01 endpoint request, 0x02 RF link loss, 0x03 bad AFI
    pub reason: u8,
}

pub fn decode_deactivate(frame: &[u8]) -> Result<DeactivationInfo> {
    Ok(DeactivationInfo {
        mode: byte_at(frame, 3)?,
        reason: byte_at(frame, 4)?,
    })
}
